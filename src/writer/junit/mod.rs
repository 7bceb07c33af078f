//! [JUnit XML report][1] [`Writer`] implementation.
//!
//! The implementation is split across several modules:
//!
//! - [`cli`]: CLI and file configuration, output path resolution
//! - [`test_case_builder`]: spec classification and `testcase` naming
//! - [`writer`]: main JUnit writer implementation
//!
//! [`Writer`]: crate::Writer
//! [1]: https://llg.cubic.org/docs/junit

pub mod cli;
pub mod test_case_builder;
pub mod writer;

pub use self::{
    cli::Cli,
    test_case_builder::{Status, TestCase},
    writer::JUnit,
};

#[cfg(test)]
mod tests {
    use std::fs;

    use quick_xml::{events::Event as XmlEvent, Reader};
    use tempfile::TempDir;

    use crate::{
        event::{Counts, Event},
        observer::Observable,
        writer::Stats as _,
    };

    use super::*;

    /// Collects `(element, [(attribute, value)])` of every start and empty
    /// tag of the given XML.
    fn elements(xml: &str) -> Vec<(String, Vec<(String, String)>)> {
        let mut reader = Reader::from_str(xml);
        let mut out = vec![];
        loop {
            match reader.read_event().unwrap() {
                XmlEvent::Start(e) | XmlEvent::Empty(e) => {
                    let attrs = e
                        .attributes()
                        .map(|a| {
                            let a = a.unwrap();
                            (
                                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                                a.unescape_value().unwrap().into_owned(),
                            )
                        })
                        .collect();
                    out.push((
                        String::from_utf8(e.name().as_ref().to_vec()).unwrap(),
                        attrs,
                    ));
                }
                XmlEvent::Eof => break,
                _ => {}
            }
        }
        out
    }

    fn attr(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect()
    }

    #[test]
    fn full_run_through_event_source() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::default().with_output_dir(dir.path().join("out"));
        let mut runner = Observable::new();
        let junit = JUnit::attached(&cli, &mut runner).unwrap();

        for ev in [
            Event::SuiteStarted,
            Event::spec_ended("folder/subfolder/first.md", Counts::passed(4)),
            Event::spec_ended(
                "/abs/second.md",
                Counts { passed: 3, executed: 6, failed: 2, ..Counts::default() },
            ),
            Event::spec_ended(
                "third.md",
                Counts { passed: 3, executed: 6, failed: 2, error: 1, skipped: 0 },
            ),
            Event::SuiteEnded(Some(Counts::passed(42))),
        ] {
            runner.dispatch_event(&ev).unwrap();
        }

        let xml =
            fs::read_to_string(dir.path().join("out").join("report.xml")).unwrap();
        assert_eq!(
            elements(&xml),
            [
                (
                    "testsuite".into(),
                    attr(&[
                        ("name", "DaSpec"),
                        ("tests", "3"),
                        ("failures", "1"),
                        ("errors", "1"),
                        ("skipped", "0"),
                    ]),
                ),
                (
                    "testcase".into(),
                    attr(&[("name", "first"), ("classname", "folder.subfolder")]),
                ),
                (
                    "testcase".into(),
                    attr(&[("name", "second"), ("classname", "abs")]),
                ),
                ("failure".into(), vec![]),
                (
                    "testcase".into(),
                    attr(&[("name", "third"), ("classname", "daspec")]),
                ),
                ("error".into(), vec![]),
            ],
        );

        let junit = junit.borrow();
        assert!(junit.is_finalized());
        assert_eq!(junit.executed_specs(), 3);
    }

    #[test]
    fn escapes_exotic_identifiers() {
        let mut junit = JUnit::raw("report.xml");
        junit.handle_spec_ended("a&b/<spec>.md", &Counts::passed(1));

        let xml = String::from_utf8(junit.to_xml().unwrap()).unwrap();

        assert_eq!(
            elements(&xml)[1],
            (
                "testcase".into(),
                attr(&[("name", "<spec>"), ("classname", "a&b")]),
            ),
        );
    }
}
