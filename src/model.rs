// Data model: records mirroring the shape of the contributions query.
// Every struct uses `#[serde(default)]` so a missing field decodes to an
// empty value instead of failing the whole response, and `null_default`
// does the same for a field that is present but `null`.

use serde::{Deserialize, Deserializer};

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single calendar date and the number of contributions made on it.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContributionDay {
    #[serde(deserialize_with = "null_default")]
    pub contribution_count: u32,
    /// ISO 8601 date (`YYYY-MM-DD`), kept as the API sends it.
    #[serde(deserialize_with = "null_default")]
    pub date: String,
}

/// One week of the calendar. The first and last weeks of a range can be
/// partial, and the API may in principle return a week with no days.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Week {
    #[serde(deserialize_with = "null_default")]
    pub contribution_days: Vec<ContributionDay>,
}

impl Week {
    /// Sum of the daily counts.
    pub fn total(&self) -> u64 {
        self.contribution_days
            .iter()
            .map(|day| u64::from(day.contribution_count))
            .sum()
    }

    /// Date of the first day, used as the week's label.
    pub fn first_date(&self) -> Option<&str> {
        self.contribution_days.first().map(|day| day.date.as_str())
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContributionCalendar {
    #[serde(deserialize_with = "null_default")]
    pub weeks: Vec<Week>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(deserialize_with = "null_default")]
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub contributions_collection: ContributionsCollection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ResponseData {
    /// `null` when the login does not resolve to a user.
    pub user: Option<User>,
}

/// One entry of the top-level `errors` array.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GraphqlError {
    #[serde(deserialize_with = "null_default")]
    pub message: String,
}

/// Response envelope. An error payload still decodes; it simply has no
/// `data` and a non-empty `errors` list.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct GraphqlResponse {
    pub data: Option<ResponseData>,
    #[serde(deserialize_with = "null_default")]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Resolve the nested envelope to the calendar, falling back to an
    /// empty one when any level is absent.
    pub fn calendar(&self) -> ContributionCalendar {
        self.data
            .as_ref()
            .and_then(|data| data.user.as_ref())
            .map(|user| user.contributions_collection.contribution_calendar.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(count: u32, date: &str) -> ContributionDay {
        ContributionDay {
            contribution_count: count,
            date: date.to_string(),
        }
    }

    #[test]
    fn week_total_sums_days() {
        let week = Week {
            contribution_days: vec![day(3, "2023-01-01"), day(4, "2023-01-02")],
        };
        assert_eq!(week.total(), 7);
        assert_eq!(week.first_date(), Some("2023-01-01"));
    }

    #[test]
    fn empty_week_has_no_label() {
        let week = Week::default();
        assert_eq!(week.total(), 0);
        assert_eq!(week.first_date(), None);
    }

    #[test]
    fn null_user_yields_empty_calendar() {
        let body = r#"{"data":{"user":null},"errors":[{"message":"Could not resolve to a User","type":"NOT_FOUND"}]}"#;
        let resp: GraphqlResponse = serde_json::from_str(body).unwrap();
        assert!(resp.calendar().weeks.is_empty());
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "Could not resolve to a User");
    }

    #[test]
    fn missing_calendar_defaults_to_no_weeks() {
        let body = r#"{"data":{"user":{"contributionsCollection":{}}}}"#;
        let resp: GraphqlResponse = serde_json::from_str(body).unwrap();
        assert!(resp.calendar().weeks.is_empty());
        assert!(resp.errors.is_empty());
    }

    fn decode(body: &str) -> GraphqlResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn null_errors_list_is_empty() {
        let resp = decode(r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[{"contributionDays":[{"contributionCount":2,"date":"2023-01-01"}]}]}}}},"errors":null}"#);
        assert!(resp.errors.is_empty());
        assert_eq!(resp.calendar().weeks.len(), 1);
    }

    #[test]
    fn null_at_each_level_decodes_empty() {
        for body in [
            r#"{"data":null}"#,
            r#"{"data":{"user":{"contributionsCollection":null}}}"#,
            r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":null}}}}"#,
            r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":null}}}}}"#,
        ] {
            assert!(decode(body).calendar().weeks.is_empty(), "{}", body);
        }
    }

    #[test]
    fn null_days_and_fields_default() {
        let resp = decode(r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[
            {"contributionDays":null},
            {"contributionDays":[{"contributionCount":null,"date":"2023-01-08"},{"contributionCount":5,"date":null}]}
        ]}}}},"errors":[{"message":null}]}"#);
        let weeks = resp.calendar().weeks;
        assert!(weeks[0].contribution_days.is_empty());
        assert_eq!(weeks[1].total(), 5);
        assert_eq!(weeks[1].first_date(), Some("2023-01-08"));
        assert_eq!(weeks[1].contribution_days[1].date, "");
        assert_eq!(resp.errors[0].message, "");
    }
}
