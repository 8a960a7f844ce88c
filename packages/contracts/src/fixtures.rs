//! Shared test fixtures.

use serde_json::{json, Value};

use crate::ast::{DateRange, ExperienceItem, SectionData, SectionStyles};
use crate::dsl::DesignTokens;
use crate::resolve::{resolve_section_styles, SectionContent};
use crate::schema::validate;

// ────────────────────────────────────────────────────────────────────────────
// Tokens
// ────────────────────────────────────────────────────────────────────────────

pub fn valid_tokens_json() -> Value {
    json!({
        "typography": {
            "fontFamily": {"heading": "inter", "body": "roboto"},
            "fontSize": "base",
            "headingStyle": "bold"
        },
        "colors": {
            "colors": {
                "primary": "#2563eb",
                "secondary": "#64748b",
                "background": "#ffffff",
                "surface": "#f8fafc",
                "text": {"primary": "#0f172a", "secondary": "#475569", "accent": "#2563eb"},
                "border": "#e2e8f0",
                "divider": "#cbd5e1"
            },
            "borderRadius": "md",
            "shadows": "subtle",
            "gradients": {"enabled": true, "direction": "to-right"}
        },
        "spacing": {
            "density": "comfortable",
            "sectionGap": "lg",
            "itemGap": "md",
            "contentPadding": "md"
        }
    })
}

pub fn minimal_tokens_json() -> Value {
    json!({
        "typography": {
            "fontFamily": {"heading": "merriweather", "body": "merriweather"},
            "fontSize": "sm",
            "headingStyle": "minimal"
        },
        "colors": {
            "colors": {
                "primary": "#000000",
                "secondary": "#666666",
                "background": "#ffffff",
                "surface": "#ffffff",
                "text": {"primary": "#000000", "secondary": "#666666", "accent": "#000000"},
                "border": "#cccccc",
                "divider": "#e0e0e0"
            },
            "borderRadius": "none",
            "shadows": "none"
        },
        "spacing": {
            "density": "compact",
            "sectionGap": "sm",
            "itemGap": "sm",
            "contentPadding": "sm"
        }
    })
}

pub fn valid_tokens() -> DesignTokens {
    validate(&valid_tokens_json()).unwrap()
}

pub fn minimal_tokens() -> DesignTokens {
    validate(&minimal_tokens_json()).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Layout and sections
// ────────────────────────────────────────────────────────────────────────────

pub fn single_column_layout_json() -> Value {
    json!({
        "type": "single-column",
        "paperSize": "a4",
        "margins": "normal",
        "pageBreakBehavior": "auto",
        "showPageNumbers": false
    })
}

pub fn two_column_layout_json() -> Value {
    json!({
        "type": "two-column",
        "paperSize": "letter",
        "margins": "compact",
        "columnDistribution": "70-30",
        "pageBreakBehavior": "section-aware",
        "showPageNumbers": true,
        "pageNumberPosition": "bottom-right"
    })
}

pub fn valid_sections_json() -> Value {
    json!([
        {"id": "summary", "visible": true, "order": 0, "column": "full-width"},
        {"id": "experience", "visible": true, "order": 1, "column": "main"},
        {"id": "education", "visible": true, "order": 2, "column": "main"},
        {"id": "skills", "visible": true, "order": 0, "column": "sidebar"},
        {"id": "languages", "visible": true, "order": 1, "column": "sidebar"},
        {"id": "certifications", "visible": false, "order": 3, "column": "main"}
    ])
}

pub fn valid_item_overrides_json() -> Value {
    json!({
        "experience": [
            {"itemId": "exp-1", "visible": true, "order": 0},
            {"itemId": "exp-2", "visible": true, "order": 1},
            {"itemId": "exp-3", "visible": false, "order": 2}
        ],
        "education": [
            {"itemId": "edu-1", "visible": true, "order": 0},
            {"itemId": "edu-2", "visible": true, "order": 1}
        ]
    })
}

pub fn complete_dsl_json() -> Value {
    json!({
        "version": "1.0.0",
        "layout": two_column_layout_json(),
        "tokens": valid_tokens_json(),
        "sections": valid_sections_json(),
        "itemOverrides": valid_item_overrides_json()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Section content
// ────────────────────────────────────────────────────────────────────────────

pub fn section_content_json() -> Value {
    json!({
        "summary": {
            "type": "summary",
            "data": {
                "content": "Experienced software engineer with a passion for building scalable applications."
            }
        },
        "experience": {
            "type": "experience",
            "items": [
                {
                    "id": "exp-1",
                    "title": "Senior Engineer",
                    "company": "Tech Corp",
                    "dateRange": {"startDate": "2020-01-01", "isCurrent": true},
                    "achievements": ["Built cool stuff", "Fixed bugs"],
                    "skills": ["React", "Node.js"]
                },
                {
                    "id": "exp-2",
                    "title": "Engineer",
                    "company": "Startup Inc",
                    "dateRange": {"startDate": "2017-06", "endDate": "2019-12"}
                },
                {
                    "id": "exp-3",
                    "title": "Intern",
                    "company": "Agency Ltd",
                    "dateRange": {"startDate": "2016-06", "endDate": "2016-09"}
                }
            ]
        },
        "education": {
            "type": "education",
            "items": [
                {
                    "id": "edu-1",
                    "institution": "State University",
                    "degree": "MSc",
                    "field": "Computer Science",
                    "dateRange": {"startDate": "2015-09", "endDate": "2017-06"}
                },
                {
                    "id": "edu-2",
                    "institution": "State University",
                    "degree": "BSc",
                    "dateRange": {"startDate": "2011-09", "endDate": "2015-06"}
                }
            ]
        },
        "skills": {
            "type": "skills",
            "items": [
                {"id": "skill-1", "name": "Rust", "level": "advanced"},
                {"id": "skill-2", "name": "TypeScript", "category": "languages"}
            ]
        },
        "languages": {
            "type": "languages",
            "items": [
                {"id": "lang-1", "name": "English", "cefrLevel": "C2"},
                {"id": "lang-2", "name": "German", "level": "conversational"}
            ]
        },
        "certifications": {
            "type": "certifications",
            "items": [
                {"id": "cert-1", "name": "CKA", "issuer": "CNCF", "issueDate": "2022-03"}
            ]
        }
    })
}

pub fn section_content() -> SectionContent {
    validate(&section_content_json()).unwrap()
}

pub fn experience_items(ids: &[&str]) -> Vec<ExperienceItem> {
    ids.iter()
        .map(|id| ExperienceItem {
            id: id.to_string(),
            title: "Engineer".into(),
            company: "Tech Corp".into(),
            location: None,
            date_range: DateRange {
                start_date: "2020-01".into(),
                end_date: None,
                is_current: true,
            },
            description: None,
            achievements: Vec::new(),
            skills: Vec::new(),
        })
        .collect()
}

pub fn summary_block() -> SectionData {
    validate(&json!({"type": "summary", "data": {"content": "Engineer."}})).unwrap()
}

pub fn custom_talks() -> SectionData {
    validate(&json!({
        "type": "custom",
        "title": "Talks",
        "items": [
            {"id": "talk-1", "title": "Zero-copy parsing", "subtitle": "RustConf"},
            {"id": "talk-2", "title": "Typed layouts"}
        ]
    }))
    .unwrap()
}

pub fn section_styles() -> SectionStyles {
    resolve_section_styles(&valid_tokens()).unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved AST
// ────────────────────────────────────────────────────────────────────────────

pub fn complete_ast_json() -> Value {
    json!({
        "meta": {"version": "1.0.0", "generatedAt": "2026-01-02T12:00:00.000Z"},
        "page": {
            "widthMm": 210,
            "heightMm": 297,
            "marginTopMm": 15,
            "marginBottomMm": 15,
            "marginLeftMm": 15,
            "marginRightMm": 15,
            "columns": [
                {"id": "main", "widthPercentage": 70, "order": 0},
                {"id": "sidebar", "widthPercentage": 30, "order": 1}
            ],
            "columnGapMm": 5
        },
        "sections": [
            {
                "sectionId": "summary",
                "columnId": "full-width",
                "order": 0,
                "data": {
                    "type": "summary",
                    "data": {
                        "content": "Experienced software engineer with a passion for building scalable applications."
                    }
                },
                "styles": {
                    "container": {
                        "backgroundColor": "#ffffff",
                        "borderColor": "#e2e8f0",
                        "borderWidthPx": 0,
                        "borderRadiusPx": 4,
                        "paddingPx": 16,
                        "marginBottomPx": 24,
                        "shadow": "0 1px 3px rgba(0,0,0,0.1)"
                    },
                    "title": {
                        "fontFamily": "Inter, sans-serif",
                        "fontSizePx": 18,
                        "lineHeight": 1.5,
                        "fontWeight": 700,
                        "textTransform": "uppercase",
                        "textDecoration": "none"
                    },
                    "content": {
                        "fontFamily": "Roboto, sans-serif",
                        "fontSizePx": 14,
                        "lineHeight": 1.6,
                        "fontWeight": 400,
                        "textTransform": "none",
                        "textDecoration": "none"
                    }
                }
            },
            {
                "sectionId": "experience",
                "columnId": "main",
                "order": 1,
                "data": {
                    "type": "experience",
                    "items": [
                        {
                            "id": "exp-1",
                            "title": "Senior Engineer",
                            "company": "Tech Corp",
                            "dateRange": {"startDate": "2020-01-01", "isCurrent": true},
                            "achievements": ["Built cool stuff", "Fixed bugs"],
                            "skills": ["React", "Node.js"]
                        }
                    ]
                },
                "styles": {
                    "container": {
                        "backgroundColor": "#ffffff",
                        "borderColor": "#e2e8f0",
                        "borderWidthPx": 0,
                        "borderRadiusPx": 4,
                        "paddingPx": 16,
                        "marginBottomPx": 24
                    },
                    "title": {
                        "fontFamily": "Inter, sans-serif",
                        "fontSizePx": 16,
                        "lineHeight": 1.5,
                        "fontWeight": 700,
                        "textTransform": "none",
                        "textDecoration": "underline"
                    },
                    "content": {
                        "fontFamily": "Roboto, sans-serif",
                        "fontSizePx": 14,
                        "lineHeight": 1.6,
                        "fontWeight": 400,
                        "textTransform": "none",
                        "textDecoration": "none"
                    }
                }
            }
        ],
        "globalStyles": {
            "background": "#ffffff",
            "textPrimary": "#0f172a",
            "textSecondary": "#475569",
            "accent": "#2563eb"
        }
    })
}
