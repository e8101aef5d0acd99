pub mod cta;
pub mod faq;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod integration;
pub mod pricing;
pub mod stats;
pub mod testimonials;

pub use cta::Cta;
pub use faq::Faq;
pub use features::Features;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use integration::Integration;
pub use pricing::Pricing;
pub use stats::Stats;
pub use testimonials::Testimonials;
