pub mod appointments;

pub use appointments::{
    create_appointment_handler, get_appointments_handler, health_check_handler,
};
