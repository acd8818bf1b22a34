use std::sync::Arc;

use tempfile::TempDir;

use super::*;
use crate::embedding::EmbeddingError;
use crate::storage::InMemoryArmStore;

struct FailingEncoder;

impl TextEncoder for FailingEncoder {
    fn encode(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "model offline".to_string(),
        })
    }

    fn dimension(&self) -> usize {
        8
    }
}

fn engine() -> Matchmaker<SbertEmbedder, InMemoryArmStore> {
    let embedder = SbertEmbedder::stub().expect("stub embedder");
    Matchmaker::new(
        SimilarityService::new(embedder),
        PolicyScorer::new(),
        LinUcbBandit::new(InMemoryArmStore::new(), BanditConfig::default()),
    )
}

fn student() -> StudentProfile {
    StudentProfile {
        id: "s-1".to_string(),
        state: "California".to_string(),
        district: "Santa Clara".to_string(),
        city: "San Jose".to_string(),
        cgpa: "8.5".to_string(),
        social_category: "General".to_string(),
        participation_type: "first-time".to_string(),
        skills: vec![
            "Python".to_string(),
            "Machine Learning".to_string(),
            "Data Analysis".to_string(),
        ],
        available_duration: "6 months".to_string(),
        ..Default::default()
    }
}

fn internship(id: &str, skills: &[&str]) -> Internship {
    Internship {
        id: id.to_string(),
        title: format!("Internship {id}"),
        description: "Build data pipelines and models".to_string(),
        skills_required: skills.iter().map(|s| s.to_string()).collect(),
        location: "San Jose, California".to_string(),
        state: "California".to_string(),
        district: "Santa Clara".to_string(),
        city: "San Jose".to_string(),
        internship_type: "on-site".to_string(),
        duration_weeks: 12,
        cgpa_requirement: Some(7.0),
        available_positions: 3,
        ..Default::default()
    }
}

fn catalog() -> Vec<Internship> {
    vec![
        internship("ml-1", &["Python", "Machine Learning", "TensorFlow"]),
        internship("web-1", &["JavaScript", "React"]),
        Internship {
            state: "New York".to_string(),
            district: "Manhattan".to_string(),
            city: "New York".to_string(),
            location: "New York".to_string(),
            ..internship("data-1", &["SQL", "Data Analysis"])
        },
        Internship {
            is_active: false,
            ..internship("closed-1", &["Python"])
        },
    ]
}

#[test]
fn test_returns_min_of_top_k_and_active() {
    let engine = engine();

    assert_eq!(
        engine.get_recommendations(&student(), &catalog(), 10).expect("ok").len(),
        3
    );
    assert_eq!(
        engine.get_recommendations(&student(), &catalog(), 2).expect("ok").len(),
        2
    );
}

#[test]
fn test_ranks_contiguous_and_scores_non_increasing() {
    let recs = engine()
        .get_recommendations(&student(), &catalog(), 10)
        .expect("ok");

    for (i, rec) in recs.iter().enumerate() {
        assert_eq!(rec.rank, i + 1);
    }
    for pair in recs.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[test]
fn test_inactive_internships_never_returned() {
    let recs = engine()
        .get_recommendations(&student(), &catalog(), 10)
        .expect("ok");
    assert!(recs.iter().all(|r| r.internship.id != "closed-1"));
}

#[test]
fn test_top_k_zero_is_empty() {
    let recs = engine()
        .get_recommendations(&student(), &catalog(), 0)
        .expect("ok");
    assert!(recs.is_empty());
}

#[test]
fn test_empty_catalog_is_empty() {
    let recs = engine()
        .get_recommendations(&student(), &[], 5)
        .expect("ok");
    assert!(recs.is_empty());
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut internships = catalog();
    internships.push(internship("ml-1", &["Rust"]));

    let result = engine().get_recommendations(&student(), &internships, 10);
    assert!(matches!(
        result,
        Err(MatchError::DuplicateInternship { id }) if id == "ml-1"
    ));
}

#[test]
fn test_inactive_record_sharing_id_is_not_a_duplicate() {
    let internships = vec![
        internship("ml-1", &["Python", "Machine Learning"]),
        Internship {
            is_active: false,
            ..internship("ml-1", &["Python"])
        },
    ];

    let recs = engine()
        .get_recommendations(&student(), &internships, 10)
        .expect("inactive record is filtered before the duplicate check");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].internship.id, "ml-1");
    assert!(recs[0].internship.is_active);
}

#[test]
fn test_duplicates_rejected_even_when_top_k_is_zero() {
    let internships = vec![internship("ml-1", &["Python"]), internship("ml-1", &["SQL"])];

    assert!(matches!(
        engine().get_recommendations(&student(), &internships, 0),
        Err(MatchError::DuplicateInternship { .. })
    ));
}

#[test]
fn test_final_score_is_weighted_blend() {
    let engine = engine();
    let explanation = engine.calculate_match(&student(), &catalog()[0]);

    let expected = 0.4 * explanation.similarity_score
        + 0.4 * explanation.policy_score
        + 0.2 * explanation.bandit_score;
    assert!((explanation.final_score - expected).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&explanation.similarity_score));
    assert!(explanation.confidence > 0.0);
}

#[test]
fn test_explanation_contents() {
    let explanation = engine().calculate_match(&student(), &catalog()[0]);

    assert_eq!(explanation.skill_matches, vec!["Python", "Machine Learning"]);
    assert_eq!(
        explanation.location_match,
        "Exact location match: San Jose, Santa Clara"
    );
    assert_eq!(explanation.equity_boost, "Equity boost for General");
    assert_eq!(explanation.participation_boost, "First-time participant support");
    assert!(explanation.cgpa_eligible);
}

#[test]
fn test_ties_broken_by_internship_id() {
    let twins = vec![
        internship("b-twin", &["Python"]),
        internship("a-twin", &["Python"]),
    ];
    let engine = engine();

    let recs = engine
        .get_recommendations(&student(), &twins, 10)
        .expect("ok");
    assert_eq!(recs[0].match_score, recs[1].match_score);
    assert_eq!(recs[0].internship.id, "a-twin");
    assert_eq!(recs[1].internship.id, "b-twin");
}

#[test]
fn test_encoder_failure_degrades_to_zero_similarity() {
    let engine = Matchmaker::new(
        SimilarityService::new(FailingEncoder),
        PolicyScorer::new(),
        LinUcbBandit::new(InMemoryArmStore::new(), BanditConfig::default()),
    );

    let recs = engine
        .get_recommendations(&student(), &catalog(), 10)
        .expect("ok");

    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r.explanation.similarity_score == 0.0));

    let health = engine.health_check();
    assert_eq!(health.status, "degraded");
    assert_eq!(health.embedder, "model");
    assert_eq!(health.probe_similarity, 0.0);
}

#[test]
fn test_feedback_reward_is_binary() {
    assert_eq!(feedback_reward(true, true), 1.0);
    assert_eq!(feedback_reward(true, false), 0.0);
    assert_eq!(feedback_reward(false, true), 0.0);
    assert_eq!(feedback_reward(false, false), 0.0);
}

#[test]
fn test_applied_but_not_approved_records_zero() {
    let engine = engine();
    let s = student();
    let i = catalog().remove(0);

    engine.record_feedback(&s.id, &i.id, &s, &i, true, false);
    engine.record_feedback(&s.id, &i.id, &s, &i, true, true);

    let log = engine.bandit().store().interactions();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].reward, 0.0);
    assert_eq!(log[1].reward, 1.0);
    assert_eq!(log[0].internship_id, "ml-1");
}

#[test]
fn test_feedback_context_is_recomputed() {
    let engine = engine();
    let s = student();
    let i = catalog().remove(0);

    let explanation = engine.calculate_match(&s, &i);
    engine.record_feedback(&s.id, &i.id, &s, &i, true, true);

    let expected = engine.bandit().context(
        &s,
        &i,
        explanation.similarity_score,
        explanation.policy_score,
    );
    assert_eq!(engine.bandit().store().interactions()[0].context, expected);
}

#[test]
fn test_positive_feedback_raises_bandit_score() {
    let engine = engine();
    let s = student();
    let i = catalog().remove(0);

    let before = engine.calculate_match(&s, &i);
    for _ in 0..3 {
        engine.record_feedback(&s.id, &i.id, &s, &i, true, true);
    }
    let after = engine.calculate_match(&s, &i);

    let mean_before = before.bandit_score - before.confidence;
    let mean_after = after.bandit_score - after.confidence;
    assert!(mean_after > mean_before);
}

#[test]
fn test_health_check_with_stub() {
    let report = engine().health_check();

    assert!(report.is_healthy());
    assert_eq!(report.embedder, "stub");
    assert_eq!(report.arm_store, "ready");
    assert!((0.0..=1.0).contains(&report.probe_similarity));
    assert!(report.probe_similarity > 0.0);
}

#[test]
fn test_from_config_uses_stub_without_model() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        storage_path: dir.path().join("data"),
        default_top_k: 2,
        ..Config::default()
    };

    let engine = Matchmaker::from_config(&config).expect("engine");

    assert!(engine.similarity().encoder().is_stub());
    assert_eq!(engine.default_top_k(), 2);
    assert_eq!(engine.recommend(&student(), &catalog()).expect("ok").len(), 2);
    assert!(dir.path().join("data").join("arms").is_dir());
}

#[test]
fn test_from_config_rejects_missing_model_dir() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        storage_path: dir.path().to_path_buf(),
        model_path: Some(dir.path().join("no-such-model")),
        ..Config::default()
    };

    assert!(matches!(
        Matchmaker::from_config(&config),
        Err(MatchError::Config(_))
    ));
}

#[tokio::test]
async fn test_detached_feedback_updates_arm() {
    let engine = Arc::new(engine());
    let s = student();
    let i = catalog().remove(0);

    engine
        .record_feedback_detached(s.clone(), i.clone(), true, true)
        .await
        .expect("feedback task");

    let log = engine.bandit().store().interactions();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].student_id, "s-1");
    assert_eq!(log[0].reward, 1.0);
    assert_ne!(engine.bandit().arm(&i.id), crate::bandit::ArmState::identity(50));
}
