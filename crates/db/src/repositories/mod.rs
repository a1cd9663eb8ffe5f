//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admission_repo;
pub mod department_repo;
pub mod event_repo;
pub mod faculty_repo;
pub mod hero_slider_repo;
pub mod journal_repo;
pub mod news_repo;
pub mod role_repo;
pub mod session_repo;
pub mod staff_repo;
pub mod user_repo;
pub mod video_repo;

pub use admission_repo::AdmissionRepo;
pub use department_repo::DepartmentRepo;
pub use event_repo::EventRepo;
pub use faculty_repo::FacultyRepo;
pub use hero_slider_repo::HeroSliderRepo;
pub use journal_repo::JournalRepo;
pub use news_repo::NewsRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use staff_repo::StaffRepo;
pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
