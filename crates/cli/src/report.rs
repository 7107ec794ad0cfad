//! Rendering of a parsed option map and query answers.

use flagmap_core::error::{Error, Result};
use flagmap_core::OptionMap;
use itertools::Itertools;
use serde::Serialize;

use crate::query::{Answer, Query};

/// What the `flagmap` binary prints.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a OptionMap>,
    pub queries: Vec<QueryAnswer>,
}

/// One evaluated query. Repeated queries each get their own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnswer {
    pub kind: &'static str,
    pub name: String,
    pub default: Answer,
    pub answer: Answer,
}

impl QueryAnswer {
    pub fn evaluate(query: &Query, options: &OptionMap) -> Self {
        Self {
            kind: query.kind(),
            name: query.name().to_string(),
            default: query.default_answer(),
            answer: query.evaluate(options),
        }
    }
}

impl<'a> Report<'a> {
    /// Evaluates `queries` against `options`, in the order given.
    pub fn build(options: &'a OptionMap, queries: &[Query], include_options: bool) -> Self {
        let queries = queries
            .iter()
            .map(|query| QueryAnswer::evaluate(query, options))
            .collect();

        Self {
            options: include_options.then_some(options),
            queries,
        }
    }

    /// `name=value` lines sorted by name, then `TYPE NAME = ANSWER` lines.
    pub fn to_text(&self) -> String {
        let option_lines = self
            .options
            .into_iter()
            .flat_map(|options| options.iter().sorted())
            .map(|(name, value)| format!("{name}={value}\n"));

        let query_lines = self
            .queries
            .iter()
            .map(|entry| format!("{} {} = {}\n", entry.kind, entry.name, entry.answer));

        option_lines.chain(query_lines).collect()
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries(texts: &[&str]) -> Vec<Query> {
        texts.iter().map(|text| text.parse().unwrap()).collect()
    }

    #[test]
    fn test_text_lists_options_sorted() {
        let options = OptionMap::parse(["-b=2", "-noa", "-c"]);
        let report = Report::build(&options, &[], true);
        assert_eq!(report.to_text(), "a=0\nb=2\nc=\n");
    }

    #[test]
    fn test_text_lists_queries_in_order() {
        let options = OptionMap::parse(["-level=3"]);
        let report = Report::build(
            &options,
            &queries(&["int:level=1", "bool:quiet", "string:name=node"]),
            false,
        );
        assert_eq!(
            report.to_text(),
            "int level = 3\nbool quiet = false\nstring name = \"node\"\n"
        );
    }

    #[test]
    fn test_repeated_queries_keep_their_own_answers() {
        let options = OptionMap::parse(Vec::<String>::new());
        let report = Report::build(
            &options,
            &queries(&["int:port=1", "int:port=2", "bool:x=0", "bool:x=1"]),
            false,
        );

        assert_eq!(report.queries.len(), 4);
        assert_eq!(
            report.to_text(),
            "int port = 1\nint port = 2\nbool x = false\nbool x = true\n"
        );
    }

    #[test]
    fn test_yaml_skips_options_when_excluded() {
        let options = OptionMap::parse(["-level=3"]);
        let report = Report::build(&options, &queries(&["int:level"]), false);
        let yaml = report.to_yaml().unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(value.get("options").is_none());
        assert_eq!(value["queries"][0]["kind"], serde_yaml::Value::from("int"));
        assert_eq!(value["queries"][0]["name"], serde_yaml::Value::from("level"));
        assert_eq!(value["queries"][0]["default"], serde_yaml::Value::from(0));
        assert_eq!(value["queries"][0]["answer"], serde_yaml::Value::from(3));
    }

    #[test]
    fn test_yaml_includes_options() {
        let options = OptionMap::parse(["-noESP"]);
        let report = Report::build(&options, &queries(&["bool:ESP=1"]), true);
        let yaml = report.to_yaml().unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["options"]["ESP"], serde_yaml::Value::from("0"));
        assert_eq!(value["queries"][0]["default"], serde_yaml::Value::from(true));
        assert_eq!(value["queries"][0]["answer"], serde_yaml::Value::from(false));
    }
}
