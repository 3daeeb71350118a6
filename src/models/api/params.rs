/// Query string of `GET /appointments`. Repeated keys are allowed; the first
/// `email` wins.
#[derive(Debug, Default)]
pub struct AppointmentParams {
    pub email: Option<String>,
}

impl AppointmentParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value);

        Self { email }
    }

    /// The email filter, if one was actually supplied. `?email=` counts as absent.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
