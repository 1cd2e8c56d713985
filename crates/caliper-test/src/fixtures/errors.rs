// Caliper - Benchmark Result Model and XML Codec
//
// Copyright (c) 2025 The Caliper Authors and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Documents a result codec must reject.

/// Start tag of a well-formed run, reused by the samples below.
pub const RUN_START: &str =
    r#"<run benchmark="examples.FooBenchmark" apiKey="key" executedTimestamp="2010-07-12T11:38:47PDT">"#;

/// Malformed `<result>` documents, by name.
pub fn invalid_result_samples() -> Vec<(&'static str, String)> {
    let run = format!("{}<scenario foo=\"A\">1200.1</scenario></run>", RUN_START);
    vec![
        ("empty", String::new()),
        ("not_xml", "this is not xml".to_string()),
        ("wrong_root", "<results/>".to_string()),
        (
            "unknown_child",
            format!("<result><environment/>{}<foo/></result>", run),
        ),
        ("missing_run", "<result><environment/></result>".to_string()),
        ("missing_environment", format!("<result>{}</result>", run)),
        (
            "duplicate_run",
            format!("<result><environment/>{}{}</result>", run, run),
        ),
        (
            "duplicate_environment",
            format!("<result><environment/><environment/>{}</result>", run),
        ),
        (
            "unclosed",
            format!("<result><environment/>{}", run),
        ),
        (
            "mismatched_end",
            format!("<result><environment/>{}</results>", run),
        ),
        (
            "trailing_element",
            format!("<result><environment/>{}</result><extra/>", run),
        ),
    ]
}

/// Malformed `<run>` documents, by name.
pub fn invalid_run_samples() -> Vec<(&'static str, String)> {
    vec![
        (
            "bad_timestamp",
            r#"<run benchmark="b" apiKey="k" executedTimestamp="not-a-date"/>"#.to_string(),
        ),
        (
            "unknown_zone",
            r#"<run benchmark="b" apiKey="k" executedTimestamp="2010-07-12T11:38:47XYZ"/>"#
                .to_string(),
        ),
        (
            "missing_benchmark",
            r#"<run apiKey="k" executedTimestamp="2010-07-12T11:38:47PDT"/>"#.to_string(),
        ),
        (
            "missing_api_key",
            r#"<run benchmark="b" executedTimestamp="2010-07-12T11:38:47PDT"/>"#.to_string(),
        ),
        ("missing_timestamp", r#"<run benchmark="b" apiKey="k"/>"#.to_string()),
        (
            "bad_measurement",
            format!("{}<scenario foo=\"A\">fast</scenario></run>", RUN_START),
        ),
        (
            "bad_unit_header",
            format!("{}<scenario foo=\"A\">ns=x|1</scenario></run>", RUN_START),
        ),
        (
            "nested_in_scenario",
            format!("{}<scenario foo=\"A\"><b>1</b></scenario></run>", RUN_START),
        ),
        (
            "foreign_child",
            format!("{}<environment/></run>", RUN_START),
        ),
        (
            "duplicate_attribute",
            format!("{}<scenario foo=\"A\" foo=\"B\">1</scenario></run>", RUN_START),
        ),
    ]
}

/// Malformed `<environment>` documents, by name.
pub fn invalid_environment_samples() -> Vec<(&'static str, String)> {
    vec![
        ("empty", String::new()),
        ("wrong_root", "<run/>".to_string()),
        ("child_element", "<environment><os/></environment>".to_string()),
        ("unquoted_attribute", "<environment os=Linux/>".to_string()),
        ("trailing_text", "<environment/>trailing".to_string()),
    ]
}
