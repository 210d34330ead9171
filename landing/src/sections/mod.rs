// Landing page sections, in page order

use crate::motion::{Entrance, Pose};

/// Section headings fade up 20 px once their section is revealed.
pub(crate) const SECTION_TITLE: Entrance = Entrance::on_reveal(Pose::hidden().offset(0, 20), 600);
/// Subtitle follows its heading 200 ms later.
pub(crate) const SECTION_SUBTITLE: Entrance = SECTION_TITLE.delayed(200);

mod about;
mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod testimonials;

pub use about::About;
pub use cta::CallToAction;
pub use features::Features;
pub use footer::{Footer, copyright};
pub use header::Header;
pub use hero::{Hero, PARTICLE_COUNT, Particle};
pub use testimonials::Testimonials;
