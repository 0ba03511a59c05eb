//! Keyword inventory of a simulation deck
//!
//! The inventory does not interpret keyword data. It records where each
//! keyword relevant to a submodule occurs, which section it sits in and the
//! first record that follows it. INCLUDE files are not followed.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::{FrameSource, Table};
use crate::error::{Error, Result};
use crate::submodules::SubmoduleOptions;

pub const COLUMNS: [&str; 4] = ["KEYWORD", "SECTION", "LINE", "FIRST_RECORD"];

const SECTIONS: [&str; 8] = [
    "RUNSPEC", "GRID", "EDIT", "PROPS", "REGIONS", "SOLUTION", "SUMMARY", "SCHEDULE",
];

const COMPDAT_KEYWORDS: &[&str] = &["WELSPECS", "COMPDAT", "COMPSEGS", "COMPLUMP", "WELOPEN", "WSEGVALV"];
const EQUIL_KEYWORDS: &[&str] = &["EQUIL", "RSVD", "RVVD", "PBVD", "PDVD"];
const FAULTS_KEYWORDS: &[&str] = &["FAULTS", "MULTFLT"];
const NNC_KEYWORDS: &[&str] = &["NNC", "EDITNNC", "NONNC"];
const PILLARS_KEYWORDS: &[&str] = &["SPECGRID", "COORD", "ZCORN"];
const PVT_KEYWORDS: &[&str] = &["PVTO", "PVDO", "PVTG", "PVDG", "PVTW", "DENSITY", "ROCK"];
const RFT_KEYWORDS: &[&str] = &["WRFT", "WRFTPLT"];
const SATFUNC_KEYWORDS: &[&str] = &["SWOF", "SGOF", "SLGOF", "SWFN", "SGFN", "SOF3", "SGWFN"];

/// One keyword occurrence in a deck
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordHit {
    pub keyword: String,
    /// Section the keyword appears in, empty before RUNSPEC
    pub section: String,
    /// 1-based line number
    pub line: usize,
    pub first_record: String,
}

/// [`FrameSource`] that tabulates deck keywords per submodule
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordInventory;

impl FrameSource for KeywordInventory {
    fn frame(&self, datafile: &Path, options: &SubmoduleOptions) -> Result<Table> {
        let bytes = fs::read(datafile)
            .map_err(|e| Error::io(format!("read datafile {}", datafile.display()), e))?;
        let text = String::from_utf8_lossy(&bytes);
        let hits = scan(&text);
        log::debug!(
            "Found {} keywords in {}",
            hits.len(),
            datafile.display()
        );
        tabulate(&hits, options)
    }
}

/// Scan deck text for keywords
pub fn scan(text: &str) -> Vec<KeywordHit> {
    let mut hits: Vec<KeywordHit> = Vec::new();
    let mut section = String::new();
    let mut pending: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        let content = match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        };
        if content.trim().is_empty() {
            continue;
        }

        if let Some(caps) = keyword_regex().captures(content) {
            let keyword = caps[1].to_string();
            if keyword == "END" {
                break;
            }
            if SECTIONS.contains(&keyword.as_str()) {
                section = keyword.clone();
            }
            hits.push(KeywordHit {
                keyword,
                section: section.clone(),
                line: idx + 1,
                first_record: String::new(),
            });
            pending = Some(hits.len() - 1);
            continue;
        }

        if let Some(hit) = pending.take() {
            let record = content.split('/').next().unwrap_or_default();
            hits[hit].first_record = record.split_whitespace().collect::<Vec<_>>().join(" ");
        }
    }

    hits
}

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z][A-Z0-9_+-]{0,7})\s*$").expect("keyword pattern is valid"))
}

/// Which keywords a submodule exports
enum Family {
    Keywords(Vec<String>),
    Section {
        section: &'static str,
        patterns: Vec<Regex>,
    },
}

impl Family {
    fn fixed(keywords: &[&str]) -> Self {
        Family::Keywords(keywords.iter().map(|k| k.to_string()).collect())
    }

    /// Fixed family narrowed to the requested keywords, if any
    fn narrowed(keywords: &[&str], requested: &Option<Vec<String>>) -> Self {
        match requested {
            None => Family::fixed(keywords),
            Some(wanted) => Family::Keywords(
                keywords
                    .iter()
                    .filter(|k| wanted.iter().any(|w| w.eq_ignore_ascii_case(k)))
                    .map(|k| k.to_string())
                    .collect(),
            ),
        }
    }

    fn section(section: &'static str, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| wildcard(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Family::Section { section, patterns })
    }

    fn contains(&self, hit: &KeywordHit) -> bool {
        match self {
            Family::Keywords(keywords) => keywords.iter().any(|k| *k == hit.keyword),
            Family::Section { section, patterns } => {
                hit.section == *section
                    && hit.keyword != *section
                    && patterns.iter().any(|p| p.is_match(&hit.keyword))
            }
        }
    }
}

fn family(options: &SubmoduleOptions) -> Result<Family> {
    let family = match options {
        SubmoduleOptions::Compdat(_) => Family::fixed(COMPDAT_KEYWORDS),
        SubmoduleOptions::Equil(opts) => Family::narrowed(EQUIL_KEYWORDS, &opts.keywords),
        SubmoduleOptions::Faults(_) => Family::fixed(FAULTS_KEYWORDS),
        SubmoduleOptions::Fipreports(opts) => Family::Keywords(vec![
            opts.fipname.to_ascii_uppercase(),
            "RPTSOL".to_string(),
            "RPTSCHED".to_string(),
        ]),
        SubmoduleOptions::Grid(opts) => Family::section("GRID", &opts.vectors)?,
        SubmoduleOptions::Nnc(_) => Family::fixed(NNC_KEYWORDS),
        SubmoduleOptions::Pillars(opts) => {
            let mut keywords: Vec<String> = PILLARS_KEYWORDS.iter().map(|k| k.to_string()).collect();
            if !opts.region.is_empty() {
                keywords.push(opts.region.to_ascii_uppercase());
            }
            Family::Keywords(keywords)
        }
        SubmoduleOptions::Pvt(opts) => Family::narrowed(PVT_KEYWORDS, &opts.keywords),
        SubmoduleOptions::Rft(_) => Family::fixed(RFT_KEYWORDS),
        SubmoduleOptions::Satfunc(opts) => Family::narrowed(SATFUNC_KEYWORDS, &opts.keywords),
        SubmoduleOptions::Summary(opts) => {
            let all = vec!["*".to_string()];
            Family::section("SUMMARY", opts.column_keys.as_ref().unwrap_or(&all))?
        }
    };
    Ok(family)
}

/// Build the export table for one submodule from scanned hits
pub fn tabulate(hits: &[KeywordHit], options: &SubmoduleOptions) -> Result<Table> {
    let family = family(options)?;
    // date filtering needs schedule timing, which the inventory does not track
    let wellname = match options {
        SubmoduleOptions::Rft(opts) => opts.wellname.as_deref(),
        _ => None,
    };

    let mut table = Table::new(COLUMNS).with_index(["KEYWORD", "LINE"]);
    for hit in hits.iter().filter(|hit| family.contains(hit)) {
        if let Some(well) = wellname {
            if first_item(&hit.first_record) != Some(well) {
                continue;
            }
        }
        table.push_row(vec![
            hit.keyword.clone(),
            hit.section.clone(),
            hit.line.to_string(),
            hit.first_record.clone(),
        ])?;
    }
    Ok(table)
}

/// First item of a record with its quotes removed
fn first_item(record: &str) -> Option<&str> {
    record
        .split_whitespace()
        .next()
        .map(|item| item.trim_matches(|c| c == '\'' || c == '"'))
}

/// Compile a `*`/`?` wildcard into an anchored regex
fn wildcard(pattern: &str) -> Result<Regex> {
    let escaped = regex::escape(&pattern.to_ascii_uppercase())
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    Ok(Regex::new(&format!("^{}$", escaped))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submodules::{pvt::PvtOptions, rft::RftOptions, summary::SummaryOptions};

    const DECK: &str = "\
-- Test deck
RUNSPEC
DIMENS
 10 10 3 /

GRID
PORO -- porosity
 300*0.25 /
PERMX
 300*100 /

PROPS
PVTW
 200 1.0 4E-5 0.3 0 /
PVDG
 100 0.05 0.01
 200 0.02 0.02 /
-- PVTO is commented out
SWOF
 0.2 0 1 0 /

SUMMARY
FOPT
FOPR
WOPR
 'OP_1' /

SCHEDULE
WRFTPLT
 'OP_1' YES /
 'OP_2' YES /
/
END
WRFT
/
";

    fn summary_options(column_keys: Option<Vec<String>>) -> SubmoduleOptions {
        SubmoduleOptions::Summary(SummaryOptions {
            time_index: "raw".to_string(),
            column_keys,
            start_date: String::new(),
            end_date: String::new(),
            params: false,
            paramfile: None,
            include_restart: false,
        })
    }

    #[test]
    fn test_scan_tracks_sections_and_records() {
        let hits = scan(DECK);
        let keywords: Vec<_> = hits.iter().map(|h| h.keyword.as_str()).collect();
        assert_eq!(
            keywords,
            vec![
                "RUNSPEC", "DIMENS", "GRID", "PORO", "PERMX", "PROPS", "PVTW", "PVDG", "SWOF",
                "SUMMARY", "FOPT", "FOPR", "WOPR", "SCHEDULE", "WRFTPLT"
            ]
        );

        let poro = &hits[3];
        assert_eq!(poro.section, "GRID");
        assert_eq!(poro.line, 7);
        assert_eq!(poro.first_record, "300*0.25");

        let fopt = hits.iter().find(|h| h.keyword == "FOPT").unwrap();
        assert_eq!(fopt.section, "SUMMARY");
        assert_eq!(fopt.first_record, "");
    }

    #[test]
    fn test_keywords_option_narrows_family() {
        let hits = scan(DECK);

        let all = tabulate(&hits, &SubmoduleOptions::Pvt(PvtOptions { keywords: None })).unwrap();
        assert_eq!(all.column("KEYWORD"), Some(vec!["PVTW", "PVDG"]));

        let only = SubmoduleOptions::Pvt(PvtOptions {
            keywords: Some(vec!["pvdg".to_string()]),
        });
        let narrowed = tabulate(&hits, &only).unwrap();
        assert_eq!(narrowed.column("KEYWORD"), Some(vec!["PVDG"]));
    }

    #[test]
    fn test_summary_section_with_wildcards() {
        let hits = scan(DECK);

        let all = tabulate(&hits, &summary_options(None)).unwrap();
        assert_eq!(all.column("KEYWORD"), Some(vec!["FOPT", "FOPR", "WOPR"]));

        let field = tabulate(&hits, &summary_options(Some(vec!["F*".to_string()]))).unwrap();
        assert_eq!(field.column("KEYWORD"), Some(vec!["FOPT", "FOPR"]));

        let single = tabulate(&hits, &summary_options(Some(vec!["w?pr".to_string()]))).unwrap();
        assert_eq!(single.column("KEYWORD"), Some(vec!["WOPR"]));
    }

    #[test]
    fn test_rft_wellname_filter() {
        let hits = scan(DECK);
        let by_well = |well: Option<&str>| {
            tabulate(
                &hits,
                &SubmoduleOptions::Rft(RftOptions {
                    wellname: well.map(str::to_string),
                    date: None,
                }),
            )
            .unwrap()
            .num_rows()
        };

        assert_eq!(by_well(None), 1);
        assert_eq!(by_well(Some("OP_1")), 1);
        assert_eq!(by_well(Some("OP_9")), 0);
        assert_eq!(by_well(Some("OP")), 0);
    }

    #[test]
    fn test_rft_wellname_is_not_a_prefix_match() {
        let hits = scan("SCHEDULE\nWRFTPLT\n 'OP_10' YES /\n/\nWRFT\n OP_1 /\n/\n");
        let table = tabulate(
            &hits,
            &SubmoduleOptions::Rft(RftOptions {
                wellname: Some("OP_1".to_string()),
                date: None,
            }),
        )
        .unwrap();
        assert_eq!(table.column("KEYWORD"), Some(vec!["WRFT"]));
    }
}
