// src/extraction/assembler.rs
use super::sections::{
    extract_basics, extract_educations, extract_interests, extract_languages, extract_skills,
    extract_works,
};
use crate::error::ResumeError;
use crate::types::resume::{Profile, Resume};
use scraper::Html;

/// Build the full résumé from a parsed profile page.
///
/// Sections run in a fixed order and the first failure aborts the whole
/// document. `source_url` is appended to the profiles as the page the
/// résumé came from.
pub fn assemble(document: &Html, source_url: &str) -> Result<Resume, ResumeError> {
    let root = document.root_element();

    let mut basics = extract_basics(root)?;
    let work = extract_works(root)?;
    let education = extract_educations(root)?;
    let skills = extract_skills(root);
    let languages = extract_languages(root)?;
    let interests = extract_interests(root);

    basics.profiles.push(Profile::source(source_url));

    Ok(Resume {
        basics,
        work,
        education,
        skills,
        languages,
        interests,
        volunteer: Vec::new(),
        awards: Vec::new(),
        publications: Vec::new(),
    })
}

/// Parse `html` and assemble it. Kept synchronous: the parsed tree is not `Send`.
pub fn resume_from_html(html: &str, source_url: &str) -> Result<Resume, ResumeError> {
    let document = Html::parse_document(html);
    assemble(&document, source_url)
}
