// src/extraction/sections.rs
//! One extractor per résumé section of a public profile page

use super::lookup::{
    compile, required_attr, required_markup, required_raw_text, required_text, text_of,
};
use super::text::{normalize_line_breaks, split_date_range, split_degree, strip_duration};
use crate::error::ResumeError;
use crate::types::resume::{Basics, Education, Interest, Language, Location, Skill, Work};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::debug;

const PICTURE_ATTRIBUTE: &str = "data-delayed-url";

// Basic info, looked up from the document root
static NAME: Lazy<Selector> = Lazy::new(|| compile("#name"));
static LABEL: Lazy<Selector> = Lazy::new(|| compile(".headline.title"));
static PICTURE: Lazy<Selector> = Lazy::new(|| compile(".profile-picture img"));
static SUMMARY: Lazy<Selector> = Lazy::new(|| compile("#summary .description p"));
static REGION: Lazy<Selector> = Lazy::new(|| compile("#demographics .locality"));

// Section records
static POSITIONS: Lazy<Selector> = Lazy::new(|| compile("#experience .position"));
static SCHOOLS: Lazy<Selector> = Lazy::new(|| compile("#education .school"));
static SKILLS: Lazy<Selector> = Lazy::new(|| compile("#skills .skill"));
static LANGUAGES: Lazy<Selector> = Lazy::new(|| compile("#languages .language"));
static INTERESTS: Lazy<Selector> = Lazy::new(|| compile("#interests .interest"));

// Fields inside a single record
static ITEM_SUBTITLE: Lazy<Selector> = Lazy::new(|| compile("header .item-subtitle span"));
static ITEM_TITLE: Lazy<Selector> = Lazy::new(|| compile("header .item-title span"));
static DATE_RANGE: Lazy<Selector> = Lazy::new(|| compile(".meta .date-range"));
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| compile(".description"));
static LANGUAGE_NAME: Lazy<Selector> = Lazy::new(|| compile(".name"));
static PROFICIENCY: Lazy<Selector> = Lazy::new(|| compile(".proficiency"));

pub fn extract_basics(root: ElementRef<'_>) -> Result<Basics, ResumeError> {
    let name = required_text(root, &NAME, "name")?;
    let label = required_text(root, &LABEL, "label")?;
    let picture = required_attr(root, &PICTURE, PICTURE_ATTRIBUTE, "picture")?;
    let summary = normalize_line_breaks(&required_markup(root, &SUMMARY, "summary")?);
    let region = required_text(root, &REGION, "region")?;

    Ok(Basics {
        name,
        label,
        picture,
        summary,
        location: Location { region },
        profiles: Vec::new(),
    })
}

pub fn extract_works(root: ElementRef<'_>) -> Result<Vec<Work>, ResumeError> {
    collect_records(root, &POSITIONS, "work", extract_work)
}

fn extract_work(record: ElementRef<'_>) -> Result<Work, ResumeError> {
    let company = required_text(record, &ITEM_SUBTITLE, "company")?;
    let position = required_text(record, &ITEM_TITLE, "position")?;
    let range = split_date_range(&required_raw_text(record, &DATE_RANGE, "date range")?)?;
    let summary = required_text(record, &DESCRIPTION, "summary")?;

    Ok(Work {
        company,
        position,
        start_date: range.start,
        end_date: strip_duration(&range.end),
        summary,
        highlights: Vec::new(),
    })
}

pub fn extract_educations(root: ElementRef<'_>) -> Result<Vec<Education>, ResumeError> {
    collect_records(root, &SCHOOLS, "education", extract_education)
}

fn extract_education(record: ElementRef<'_>) -> Result<Education, ResumeError> {
    let institution = required_text(record, &ITEM_TITLE, "institution")?;
    // Education end dates keep any parenthesised suffix
    let range = split_date_range(&required_raw_text(record, &DATE_RANGE, "date range")?)?;
    let (study_type, area) = split_degree(&required_raw_text(record, &ITEM_SUBTITLE, "degree")?)?;

    Ok(Education {
        institution,
        start_date: range.start,
        end_date: range.end,
        study_type,
        area,
    })
}

pub fn extract_skills(root: ElementRef<'_>) -> Vec<Skill> {
    root.select(&SKILLS)
        .map(|node| Skill {
            name: text_of(node),
        })
        .collect()
}

pub fn extract_languages(root: ElementRef<'_>) -> Result<Vec<Language>, ResumeError> {
    collect_records(root, &LANGUAGES, "languages", |record| {
        Ok(Language {
            name: required_text(record, &LANGUAGE_NAME, "language name")?,
            level: required_text(record, &PROFICIENCY, "language proficiency")?,
        })
    })
}

pub fn extract_interests(root: ElementRef<'_>) -> Vec<Interest> {
    root.select(&INTERESTS)
        .map(|node| Interest {
            name: text_of(node),
        })
        .collect()
}

/// Run `extract` over every record node in document order. The first
/// failing record discards the whole section.
fn collect_records<'a, T>(
    root: ElementRef<'a>,
    records: &Selector,
    section: &str,
    extract: impl Fn(ElementRef<'a>) -> Result<T, ResumeError>,
) -> Result<Vec<T>, ResumeError> {
    let items = root
        .select(records)
        .map(extract)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Extracted {} {} record(s)", items.len(), section);
    Ok(items)
}
