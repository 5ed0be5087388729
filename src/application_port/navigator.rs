use crate::domain_model::Route;

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: &Route);
}
