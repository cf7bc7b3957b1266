//! # Holiday Detail Panel
//!
//! Renders one [`HolidayRecord`] for the selected day. Fixed rows are
//! always present; launch year, types, and counties appear only when the
//! record carries them.

use std::fmt;

use hcal_core::HolidayRecord;
use serde::Serialize;

/// The panel's only interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailAction {
    Close,
}

impl DetailAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Close => "close",
        }
    }
}

/// One labelled row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// A labelled list rendered as chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailList {
    pub label: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel {
    pub title: String,
    pub fields: Vec<DetailField>,
    pub lists: Vec<DetailList>,
    pub actions: Vec<DetailAction>,
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

impl DetailPanel {
    pub fn new(holiday: &HolidayRecord) -> Self {
        let mut fields = vec![
            DetailField {
                label: "Local Name",
                value: holiday.local_name.clone(),
            },
            DetailField {
                label: "Country",
                value: holiday.country_code.to_string(),
            },
            DetailField {
                label: "Fixed Date",
                value: yes_no(holiday.fixed),
            },
            DetailField {
                label: "Global",
                value: yes_no(holiday.global),
            },
        ];
        if let Some(year) = holiday.launch_year {
            fields.push(DetailField {
                label: "Launch Year",
                value: year.to_string(),
            });
        }

        let mut lists = Vec::new();
        if !holiday.types.is_empty() {
            lists.push(DetailList {
                label: "Types",
                items: holiday.types.clone(),
            });
        }
        if let Some(regions) = holiday.regions() {
            lists.push(DetailList {
                label: "Applicable Counties",
                items: regions.to_vec(),
            });
        }

        Self {
            title: holiday.name.clone(),
            fields,
            lists,
            actions: vec![DetailAction::Close],
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    pub fn list(&self, label: &str) -> Option<&[String]> {
        self.lists
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.items.as_slice())
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions: Vec<String> = self
            .actions
            .iter()
            .map(|a| format!("[{}]", a.as_str()))
            .collect();
        writeln!(f, "{}  {}", self.title, actions.join(" "))?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.label, field.value)?;
        }
        for list in &self.lists {
            writeln!(f, "  {}: {}", list.label, list.items.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hcal_core::CountryCode;

    fn republic_day() -> HolidayRecord {
        HolidayRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
            local_name: "Republic Day".into(),
            name: "Republic Day".into(),
            country_code: CountryCode::new("IN").unwrap(),
            fixed: true,
            global: true,
            counties: None,
            launch_year: None,
            types: vec!["National holiday".into()],
        }
    }

    #[test]
    fn always_shows_core_fields() {
        let panel = DetailPanel::new(&republic_day());
        assert_eq!(panel.title, "Republic Day");
        assert_eq!(panel.field("Local Name"), Some("Republic Day"));
        assert_eq!(panel.field("Country"), Some("IN"));
        assert_eq!(panel.field("Fixed Date"), Some("Yes"));
        assert_eq!(panel.field("Global"), Some("Yes"));
        assert_eq!(panel.actions, vec![DetailAction::Close]);
    }

    #[test]
    fn optional_rows_omitted_when_absent() {
        let mut h = republic_day();
        h.types.clear();
        let panel = DetailPanel::new(&h);
        assert!(panel.field("Launch Year").is_none());
        assert!(panel.list("Types").is_none());
        assert!(panel.list("Applicable Counties").is_none());
    }

    #[test]
    fn optional_rows_present_when_set() {
        let mut h = republic_day();
        h.fixed = false;
        h.global = false;
        h.launch_year = Some(1950);
        h.counties = Some(vec!["IN-KA".into(), "IN-TN".into()]);
        let panel = DetailPanel::new(&h);
        assert_eq!(panel.field("Fixed Date"), Some("No"));
        assert_eq!(panel.field("Global"), Some("No"));
        assert_eq!(panel.field("Launch Year"), Some("1950"));
        assert_eq!(
            panel.list("Applicable Counties"),
            Some(&["IN-KA".to_string(), "IN-TN".to_string()][..])
        );
    }

    #[test]
    fn empty_county_list_is_hidden() {
        let mut h = republic_day();
        h.counties = Some(vec![]);
        assert!(DetailPanel::new(&h).list("Applicable Counties").is_none());
    }

    #[test]
    fn text_rendering() {
        let text = DetailPanel::new(&republic_day()).to_string();
        assert_eq!(
            text,
            "Republic Day  [close]\n  \
             Local Name: Republic Day\n  \
             Country: IN\n  \
             Fixed Date: Yes\n  \
             Global: Yes\n  \
             Types: National holiday\n"
        );
    }
}
