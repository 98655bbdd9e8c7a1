pub mod document;
pub mod employee;
pub mod onboarding;
