//! Validate front matter across the content tree

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::loader::is_post_file;
use crate::content::FrontMatter;
use crate::Blog;

/// Outcome of checking one content tree
#[derive(Debug, Default)]
pub struct CheckReport {
    pub files: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Run the check command
pub fn run(blog: &Blog) -> Result<()> {
    let report = check_tree(blog)?;

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }
    println!(
        "Checked {} files: {} errors, {} warnings",
        report.files,
        report.errors.len(),
        report.warnings.len()
    );

    if !report.errors.is_empty() {
        anyhow::bail!("Found {} problems in the content tree", report.errors.len());
    }

    Ok(())
}

/// Validate every post file under the content directory
pub fn check_tree(blog: &Blog) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    // slug -> first file seen with it
    let mut slugs: HashMap<String, String> = HashMap::new();

    if !blog.content_dir.exists() {
        report
            .warnings
            .push(format!("Content directory {:?} does not exist", blog.content_dir));
        return Ok(report);
    }

    for entry in WalkDir::new(&blog.content_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_post_file(path) {
            continue;
        }

        let source = path
            .strip_prefix(&blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        report.files += 1;
        check_file(path, &source, &mut report, &mut slugs);
    }

    Ok(report)
}

fn check_file(
    path: &Path,
    source: &str,
    report: &mut CheckReport,
    slugs: &mut HashMap<String, String>,
) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            report.errors.push(format!("{}: unreadable: {}", source, e));
            return;
        }
    };

    if !FrontMatter::is_present(&content) {
        report.errors.push(format!("{}: missing front matter", source));
        return;
    }

    let fm = match FrontMatter::parse(&content) {
        Ok((fm, _)) => fm,
        Err(e) => {
            report.errors.push(format!("{}: {}", source, e));
            return;
        }
    };

    match fm.title.as_deref().map(str::trim) {
        None | Some("") => {
            report.errors.push(format!("{}: missing or empty title", source));
        }
        Some(_) => {}
    }

    match &fm.date {
        None => {
            report.warnings.push(format!("{}: no date set", source));
        }
        Some(raw) => match fm.parse_date() {
            None => {
                report
                    .errors
                    .push(format!("{}: unparseable date {:?}", source, raw));
            }
            Some(date) => {
                if date > chrono::Local::now() {
                    report
                        .warnings
                        .push(format!("{}: date {} is in the future", source, raw));
                }
            }
        },
    }

    let slug = fm.slug.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string()
    });
    if let Some(first) = slugs.get(&slug) {
        report.errors.push(format!(
            "{}: duplicate slug {:?} (also used by {})",
            source, slug, first
        ));
    } else {
        slugs.insert(slug, source.to_string());
    }
}
