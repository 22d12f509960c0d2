use resume_scraper::types::resume::{Language, Profile};
use resume_scraper::{resume_from_html, ResumeError};

const PROFILE: &str = include_str!("fixtures/profile.html");
const SOURCE: &str = "https://www.linkedin.com/in/margaret-hamilton";

#[test]
fn test_full_profile() {
    let resume = resume_from_html(PROFILE, SOURCE).unwrap();

    let basics = &resume.basics;
    assert_eq!(basics.name, "Margaret Hamilton");
    assert_eq!(basics.label, "Director of Software Engineering");
    assert_eq!(basics.picture, "https://media.example.com/hamilton-200.jpg");
    assert_eq!(basics.location.region, "Greater Boston Area");
    assert!(basics
        .summary
        .starts_with("Led the team that wrote the on-board flight software.\n"));
    assert!(basics.summary.contains("software engineering"));
    assert_eq!(basics.profiles, vec![Profile::source(SOURCE)]);

    assert_eq!(resume.work.len(), 2);
    assert_eq!(resume.work[0].company, "MIT Instrumentation Laboratory");
    assert_eq!(
        resume.work[0].position,
        "Director, Software Engineering Division"
    );
    assert_eq!(resume.work[0].start_date, "1965");
    assert_eq!(resume.work[0].end_date, "1976");
    assert_eq!(resume.work[1].company, "Hamilton Technologies");
    assert_eq!(resume.work[1].end_date, "Present");
    assert_eq!(resume.work[1].summary, "Universal Systems Language.");

    assert_eq!(resume.education.len(), 2);
    assert_eq!(resume.education[0].institution, "Earlham College");
    assert_eq!(resume.education[0].study_type, "Bachelor of Arts");
    assert_eq!(resume.education[0].area, "Mathematics");
    assert_eq!(resume.education[0].start_date, "1954");
    assert_eq!(resume.education[0].end_date, "1958 (4 years)");
    assert_eq!(resume.education[1].end_date, "1959");

    let skills: Vec<&str> = resume.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        skills,
        ["Software Engineering", "Systems Design", "Assembly"]
    );

    assert_eq!(
        resume.languages[1],
        Language {
            name: "French".to_string(),
            level: "Elementary proficiency".to_string(),
        }
    );

    let interests: Vec<&str> = resume.interests.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(interests, ["Philosophy", "Mathematics"]);
}

#[test]
fn test_json_document_shape() {
    let resume = resume_from_html(PROFILE, SOURCE).unwrap();
    let value = serde_json::to_value(&resume).unwrap();

    assert_eq!(value["basics"]["profiles"][0]["network"], "LinkedIn");
    assert_eq!(value["basics"]["profiles"][0]["url"], SOURCE);
    assert_eq!(value["education"][0]["studyType"], "Bachelor of Arts");
    assert_eq!(value["work"][1]["highlights"], serde_json::json!([]));
    assert_eq!(value["volunteer"], serde_json::json!([]));
    assert_eq!(value["awards"], serde_json::json!([]));
    assert_eq!(value["publications"], serde_json::json!([]));
}

#[test]
fn test_identical_markup_gives_identical_output() {
    let first = serde_json::to_string(&resume_from_html(PROFILE, SOURCE).unwrap()).unwrap();
    let second = serde_json::to_string(&resume_from_html(PROFILE, SOURCE).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_skills_section_is_not_an_error() {
    let page = PROFILE.replace(r#"class="skill""#, r#"class="endorsement""#);
    let resume = resume_from_html(&page, SOURCE).unwrap();

    assert!(resume.skills.is_empty());
    assert_eq!(resume.work.len(), 2);
}

#[test]
fn test_missing_name_aborts() {
    let page = PROFILE.replace(r#"id="name""#, r#"id="full-name""#);

    assert_eq!(
        resume_from_html(&page, SOURCE),
        Err(ResumeError::MissingField { field: "name" })
    );
}

#[test]
fn test_malformed_degree_aborts() {
    let page = PROFILE.replace("Coursework, Mathematics", "Coursework");

    match resume_from_html(&page, SOURCE) {
        Err(ResumeError::MalformedText { field, text, .. }) => {
            assert_eq!(field, "degree");
            assert_eq!(text, "Coursework");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_language_without_proficiency_aborts() {
    let page = PROFILE.replace(
        r#"<p class="proficiency">Elementary proficiency</p>"#,
        "",
    );

    assert_eq!(
        resume_from_html(&page, SOURCE),
        Err(ResumeError::MissingField {
            field: "language proficiency"
        })
    );
}
