use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Route(pub String);

impl Route {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Route(value.to_owned())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
