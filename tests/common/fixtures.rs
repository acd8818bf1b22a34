//! Test fixtures: profile/internship builders and engine constructors.

use std::path::Path;

use matchmaker::{
    BanditConfig, FileArmStore, InMemoryArmStore, Internship, LinUcbBandit, Matchmaker,
    PolicyScorer, SbertEmbedder, SimilarityService, StudentProfile,
};

pub type FileEngine = Matchmaker<SbertEmbedder, FileArmStore>;
pub type MemoryEngine = Matchmaker<SbertEmbedder, InMemoryArmStore>;

/// Builder for [`StudentProfile`] with sensible defaults (San Jose, first-time, General).
pub struct StudentBuilder {
    profile: StudentProfile,
}

impl StudentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            profile: StudentProfile {
                id: id.to_string(),
                full_name: "Test Student".to_string(),
                state: "California".to_string(),
                district: "Santa Clara".to_string(),
                city: "San Jose".to_string(),
                cgpa: "8.5".to_string(),
                social_category: "General".to_string(),
                family_income: "₹2,00,000 - ₹5,00,000".to_string(),
                participation_type: "first-time".to_string(),
                skills: vec![
                    "Python".to_string(),
                    "Machine Learning".to_string(),
                    "SQL".to_string(),
                ],
                preferred_locations: vec!["San Francisco".to_string()],
                stipend_expectation: "₹15,000 - ₹25,000".to_string(),
                available_duration: "6 months".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.profile.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn social_category(mut self, category: &str) -> Self {
        self.profile.social_category = category.to_string();
        self
    }

    pub fn cgpa(mut self, cgpa: &str) -> Self {
        self.profile.cgpa = cgpa.to_string();
        self
    }

    pub fn build(self) -> StudentProfile {
        self.profile
    }
}

/// Builder for [`Internship`] located in San Jose unless overridden.
pub struct InternshipBuilder {
    internship: Internship,
}

impl InternshipBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            internship: Internship {
                id: id.to_string(),
                title: format!("Internship {id}"),
                company: "Acme".to_string(),
                description: "Work with the engineering team".to_string(),
                location: "San Jose, California".to_string(),
                state: "California".to_string(),
                district: "Santa Clara".to_string(),
                city: "San Jose".to_string(),
                internship_type: "on-site".to_string(),
                duration_weeks: 12,
                stipend_amount: Some(20_000.0),
                stipend_currency: "INR".to_string(),
                available_positions: 5,
                ..Default::default()
            },
        }
    }

    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.internship.skills_required = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.internship.description = description.to_string();
        self
    }

    pub fn location(mut self, state: &str, district: &str, city: &str) -> Self {
        self.internship.state = state.to_string();
        self.internship.district = district.to_string();
        self.internship.city = city.to_string();
        self.internship.location = format!("{city}, {state}");
        self
    }

    pub fn remote(mut self) -> Self {
        self.internship.internship_type = "remote".to_string();
        self
    }

    pub fn cgpa_requirement(mut self, cgpa: f64) -> Self {
        self.internship.cgpa_requirement = Some(cgpa);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.internship.is_active = false;
        self
    }

    pub fn build(self) -> Internship {
        self.internship
    }
}

pub fn san_jose_student() -> StudentProfile {
    StudentBuilder::new("student-1").build()
}

/// Five internships, one of them inactive.
pub fn sample_catalog() -> Vec<Internship> {
    vec![
        InternshipBuilder::new("ml-san-jose")
            .skills(&["Python", "Machine Learning", "TensorFlow"])
            .description("Train and evaluate machine learning models")
            .cgpa_requirement(8.0)
            .build(),
        InternshipBuilder::new("frontend-palo-alto")
            .skills(&["JavaScript", "React", "CSS"])
            .description("Build user interfaces")
            .location("California", "Santa Clara", "Palo Alto")
            .build(),
        InternshipBuilder::new("data-remote")
            .skills(&["SQL", "Data Analysis"])
            .description("Analyse product metrics")
            .location("New York", "Manhattan", "New York")
            .remote()
            .build(),
        InternshipBuilder::new("ops-new-york")
            .skills(&["Kubernetes", "Linux"])
            .description("Operate production infrastructure")
            .location("New York", "Manhattan", "New York")
            .build(),
        InternshipBuilder::new("closed-ml")
            .skills(&["Python", "Machine Learning"])
            .inactive()
            .build(),
    ]
}

pub fn memory_engine() -> MemoryEngine {
    Matchmaker::new(
        SimilarityService::new(SbertEmbedder::stub().expect("stub embedder")),
        PolicyScorer::new(),
        LinUcbBandit::new(InMemoryArmStore::new(), BanditConfig::default()),
    )
}

pub fn file_engine(root: &Path) -> FileEngine {
    Matchmaker::new(
        SimilarityService::new(SbertEmbedder::stub().expect("stub embedder")),
        PolicyScorer::new(),
        LinUcbBandit::new(
            FileArmStore::open(root).expect("open arm store"),
            BanditConfig::default(),
        ),
    )
}
