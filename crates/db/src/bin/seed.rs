//! Seed the database with demonstration content.
//!
//! Populates the academic structure (faculties, departments, staff) and the
//! public content tables, and creates an initial admin user. Safe to run
//! repeatedly: seeding is skipped when content already exists.
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run -p unipas-db --bin seed
//! ```

use anyhow::{bail, Context, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};

use unipas_core::roles::ROLE_ADMIN;
use unipas_core::slug::slugify;
use unipas_core::staff::{STAFF_ROLE_DEAN, STAFF_ROLE_HEAD, STAFF_ROLE_LECTURER};
use unipas_db::models::admission::CreateAdmission;
use unipas_db::models::department::CreateDepartment;
use unipas_db::models::event::CreateEvent;
use unipas_db::models::faculty::CreateFaculty;
use unipas_db::models::hero_slider::CreateHeroSlider;
use unipas_db::models::journal::CreateJournal;
use unipas_db::models::news::CreateNews;
use unipas_db::models::staff::CreateStaff;
use unipas_db::models::video::CreateVideo;
use unipas_db::repositories::{
    AdmissionRepo, DepartmentRepo, EventRepo, FacultyRepo, HeroSliderRepo, JournalRepo, NewsRepo,
    RoleRepo, StaffRepo, UserRepo, VideoRepo,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = unipas_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    unipas_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    seed_admin_user(&pool).await?;

    if !FacultyRepo::list(&pool, true).await?.is_empty() {
        tracing::info!("Content already present, skipping content seed");
        return Ok(());
    }

    seed_content(&pool).await?;
    tracing::info!("Seed complete");
    Ok(())
}

/// Create the initial admin account unless a user already exists.
///
/// The password comes from `SEED_ADMIN_PASSWORD`; there is no default so a
/// throwaway credential can never reach production by accident.
async fn seed_admin_user(pool: &unipas_db::DbPool) -> Result<()> {
    if UserRepo::find_by_username(pool, "admin").await?.is_some() {
        tracing::info!("Admin user already exists, skipping");
        return Ok(());
    }

    let password =
        std::env::var("SEED_ADMIN_PASSWORD").context("SEED_ADMIN_PASSWORD must be set")?;
    if password.len() < 12 {
        bail!("SEED_ADMIN_PASSWORD must be at least 12 characters");
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?
        .to_string();

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .context("admin role missing; migrations not applied?")?;

    let user = UserRepo::create(pool, "admin", "admin@unipas.ac.id", &hash, role.id).await?;
    tracing::info!(user_id = user.id, "Created admin user");
    Ok(())
}

async fn seed_content(pool: &unipas_db::DbPool) -> Result<()> {
    // --- Faculties and departments ---
    let fakultas = [
        (
            "Fakultas Ilmu Alam dan Teknologi",
            "FIAT",
            vec![
                ("Teknik Informatika", "S1", "B"),
                ("Agribisnis", "S1", "B"),
                ("Ilmu Kelautan", "S1", "C"),
            ],
        ),
        (
            "Fakultas Ilmu Sosial dan Kependidikan",
            "FISKEP",
            vec![
                ("Pendidikan Guru Sekolah Dasar", "S1", "B"),
                ("Administrasi Publik", "S1", "B"),
            ],
        ),
        (
            "Fakultas Ekonomi dan Bisnis",
            "FEB",
            vec![("Manajemen", "S1", "B"), ("Akuntansi", "S1", "C")],
        ),
    ];

    for (name, abbr, departments) in fakultas {
        let faculty = FacultyRepo::create(
            pool,
            &CreateFaculty {
                name: name.to_string(),
                slug: None,
                abbreviation: Some(abbr.to_string()),
                description: Some(format!("{name} Universitas Pasifik Morotai.")),
                vision: Some("Menjadi fakultas unggul di kawasan Indonesia Timur.".to_string()),
                mission: Some(
                    "Menyelenggarakan pendidikan, penelitian, dan pengabdian masyarakat."
                        .to_string(),
                ),
                image_url: None,
                is_active: Some(true),
            },
            &slugify(name),
        )
        .await?;

        let dean_name = format!("Dekan {abbr}");
        StaffRepo::create(
            pool,
            &CreateStaff {
                name: dean_name,
                position: Some("Dekan".to_string()),
                role: STAFF_ROLE_DEAN.to_string(),
                faculty_id: Some(faculty.id),
                department_id: None,
                nidn: None,
                email: None,
                phone: None,
                photo_url: None,
                bio: None,
                is_active: Some(true),
            },
        )
        .await?;

        for (dept_name, degree, accreditation) in departments {
            let department = DepartmentRepo::create(
                pool,
                &CreateDepartment {
                    faculty_id: faculty.id,
                    name: dept_name.to_string(),
                    slug: None,
                    degree: Some(degree.to_string()),
                    accreditation: Some(accreditation.to_string()),
                    description: Some(format!(
                        "Program Studi {dept_name} ({degree}), {name}."
                    )),
                    image_url: None,
                    is_active: Some(true),
                },
                &slugify(dept_name),
            )
            .await?;

            StaffRepo::create(
                pool,
                &CreateStaff {
                    name: format!("Ketua Prodi {dept_name}"),
                    position: Some("Ketua Program Studi".to_string()),
                    role: STAFF_ROLE_HEAD.to_string(),
                    faculty_id: Some(faculty.id),
                    department_id: Some(department.id),
                    nidn: None,
                    email: None,
                    phone: None,
                    photo_url: None,
                    bio: None,
                    is_active: Some(true),
                },
            )
            .await?;

            StaffRepo::create(
                pool,
                &CreateStaff {
                    name: format!("Dosen {dept_name}"),
                    position: Some("Dosen".to_string()),
                    role: STAFF_ROLE_LECTURER.to_string(),
                    faculty_id: Some(faculty.id),
                    department_id: Some(department.id),
                    nidn: None,
                    email: None,
                    phone: None,
                    photo_url: None,
                    bio: None,
                    is_active: Some(true),
                },
            )
            .await?;
        }
    }

    // --- News ---
    let articles = [
        (
            "Penerimaan Mahasiswa Baru Tahun Akademik 2026/2027 Dibuka",
            "Pengumuman",
            true,
        ),
        ("Kuliah Umum Ekonomi Biru di Morotai", "Akademik", false),
        ("Mahasiswa Agribisnis Juara Lomba Inovasi Pangan", "Prestasi", false),
    ];
    for (title, category, featured) in articles {
        NewsRepo::create(
            pool,
            &CreateNews {
                title: title.to_string(),
                slug: None,
                excerpt: Some(format!("{title}.")),
                content: format!("{title}. Informasi selengkapnya menyusul."),
                category: Some(category.to_string()),
                image_url: None,
                is_featured: Some(featured),
                published_at: None,
                is_active: Some(true),
            },
            &slugify(title),
        )
        .await?;
    }

    // --- Events ---
    let now = Utc::now();
    let events = [
        ("Wisuda Sarjana Angkatan XII", "Auditorium Kampus", 30),
        ("Seminar Nasional Kemaritiman", "Aula FIAT", 14),
    ];
    for (title, location, days_ahead) in events {
        EventRepo::create(
            pool,
            &CreateEvent {
                title: title.to_string(),
                slug: None,
                description: Some(format!("{title} Universitas Pasifik Morotai.")),
                location: Some(location.to_string()),
                starts_at: now + Duration::days(days_ahead),
                ends_at: Some(now + Duration::days(days_ahead) + Duration::hours(6)),
                image_url: None,
                is_featured: Some(days_ahead <= 14),
                is_active: Some(true),
            },
            &slugify(title),
        )
        .await?;
    }

    // --- Admissions ---
    let tracks = [
        ("Jalur Reguler", 200),
        ("Jalur Prestasi", 50),
        ("Jalur Kerja Sama Daerah", 75),
    ];
    for (name, quota) in tracks {
        AdmissionRepo::create(
            pool,
            &CreateAdmission {
                name: name.to_string(),
                slug: None,
                description: Some(format!("{name} penerimaan mahasiswa baru.")),
                requirements: Some("Ijazah SMA/sederajat, rapor semester 1-5.".to_string()),
                registration_start: Some(now),
                registration_end: Some(now + Duration::days(90)),
                quota: Some(quota),
                is_active: Some(true),
            },
            &slugify(name),
        )
        .await?;
    }

    // --- Journals ---
    let journals = [
        (
            "Pengelolaan Perikanan Berkelanjutan di Perairan Morotai",
            "Siti Rahma, Budi Santoso",
            "Kelautan",
            2025,
        ),
        (
            "Sistem Informasi Desa Berbasis Web untuk Pulau Terluar",
            "Andi Prasetyo",
            "Informatika",
            2024,
        ),
    ];
    for (title, authors, category, year) in journals {
        JournalRepo::create(
            pool,
            &CreateJournal {
                title: title.to_string(),
                slug: None,
                abstract_text: Some(format!("Abstrak: {title}.")),
                authors: authors.to_string(),
                faculty_id: None,
                category: Some(category.to_string()),
                year,
                pdf_url: None,
                is_active: Some(true),
            },
            &slugify(title),
        )
        .await?;
    }

    // --- Videos ---
    VideoRepo::create(
        pool,
        &CreateVideo {
            title: "Profil Universitas Pasifik Morotai".to_string(),
            description: Some("Video profil kampus.".to_string()),
            youtube_url: "https://www.youtube.com/watch?v=unipas-profil".to_string(),
            thumbnail_url: None,
            category: Some("Profil".to_string()),
            duration_secs: Some(312),
            is_featured: Some(true),
            published_at: None,
            is_active: Some(true),
        },
    )
    .await?;

    // --- Hero sliders ---
    let sliders = [
        ("Selamat Datang di Universitas Pasifik Morotai", 0),
        ("Penerimaan Mahasiswa Baru 2026/2027", 1),
    ];
    for (title, sort_order) in sliders {
        HeroSliderRepo::create(
            pool,
            &CreateHeroSlider {
                title: title.to_string(),
                subtitle: Some("Kampus unggul di gerbang Pasifik.".to_string()),
                image_url: format!("/uploads/hero-{sort_order}.jpg"),
                cta_label: Some("Daftar Sekarang".to_string()),
                cta_url: Some("/penerimaan".to_string()),
                sort_order: Some(sort_order),
                is_active: Some(true),
            },
        )
        .await?;
    }

    Ok(())
}
