//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_post_repo;
pub mod integration_repo;
pub mod lead_repo;
pub mod site_content_repo;
pub mod testimonial_repo;
pub mod user_repo;
pub mod video_repo;

pub use blog_post_repo::BlogPostRepo;
pub use integration_repo::IntegrationRepo;
pub use lead_repo::LeadRepo;
pub use site_content_repo::SiteContentRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
