mod draft;
mod onboarding;

pub use draft::*;
pub use onboarding::*;
