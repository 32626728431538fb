//! Page components: the shell (header/footer), the content sections, and
//! the `Reveal` wrapper driving scroll-triggered fade-ins.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod skills;
