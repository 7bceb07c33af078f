//! Main JUnit XML writer implementation.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event as XmlEvent};
use tracing::{debug, info, trace};

use crate::{
    error::{ConfigResult, WriterResult},
    event::{Counts, Event, EventKind},
    observer::EventSource,
    writer::{Stats, Writer},
};

use super::{
    cli::Cli,
    test_case_builder::{Status, TestCase},
};

/// Value of the `name` attribute of the root `testsuite`.
pub const SUITE_NAME: &str = "DaSpec";

/// Lifecycle state of a [`JUnit`] [`Writer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Specs are being collected.
    Accumulating,

    /// Report has been written at least once.
    Finalized,
}

/// [JUnit XML report][1] [`Writer`] implementation outputting XML into a
/// file.
///
/// Collects a `testcase` for every [`Event::SpecEnded`] and writes the whole
/// report on [`Event::SuiteEnded`]. Totals are counted from the received
/// specs only, the counts carried by [`Event::SuiteEnded`] are ignored.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Debug)]
pub struct JUnit {
    /// Path the report is written to, resolved once on construction.
    path: PathBuf,

    /// Collected `testcase`s in the order specs have finished.
    cases: Vec<TestCase>,

    /// Number of finished specs.
    executed_specs: usize,

    /// Number of failed specs.
    failed_specs: usize,

    /// Number of specs finished with an error.
    error_specs: usize,

    /// Number of skipped specs.
    skipped_specs: usize,

    state: State,
}

impl Writer for JUnit {
    fn handle_event(&mut self, event: &Event) -> WriterResult<()> {
        match event {
            Event::SpecEnded { identifier, counts } => {
                self.handle_spec_ended(identifier, counts);
                Ok(())
            }
            Event::SuiteEnded(_) => self.handle_suite_ended(),
            Event::SuiteStarted | Event::SpecStarted { .. } => {
                trace!(event = %event.kind(), "ignoring event");
                Ok(())
            }
        }
    }
}

impl Stats for JUnit {
    fn executed_specs(&self) -> usize {
        self.executed_specs
    }

    fn failed_specs(&self) -> usize {
        self.failed_specs
    }

    fn error_specs(&self) -> usize {
        self.error_specs
    }

    fn skipped_specs(&self) -> usize {
        self.skipped_specs
    }
}

impl JUnit {
    /// Creates a new [`JUnit`] [`Writer`] writing into the path resolved from
    /// the given [`Cli`] options.
    ///
    /// # Errors
    ///
    /// If the output path cannot be resolved, see [`Cli::output_path()`].
    pub fn new(cli: &Cli) -> ConfigResult<Self> {
        Ok(Self::raw(cli.output_path()?))
    }

    /// Creates a new [`JUnit`] [`Writer`] writing into the given `path` as is.
    #[must_use]
    pub fn raw(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cases: vec![],
            executed_specs: 0,
            failed_specs: 0,
            error_specs: 0,
            skipped_specs: 0,
            state: State::Accumulating,
        }
    }

    /// Creates a new [`JUnit`] [`Writer`] and subscribes it to the given
    /// [`EventSource`].
    ///
    /// Nothing is subscribed if the output path cannot be resolved.
    ///
    /// # Errors
    ///
    /// If the output path cannot be resolved, see [`Cli::output_path()`].
    pub fn attached<'h>(
        cli: &Cli,
        source: &mut impl EventSource<'h>,
    ) -> ConfigResult<Rc<RefCell<Self>>> {
        Ok(Self::new(cli)?.attach(source))
    }

    /// Subscribes this [`JUnit`] [`Writer`] to [`EventKind::SpecEnded`] and
    /// [`EventKind::SuiteEnded`] events of the given [`EventSource`].
    ///
    /// Returns a shared handle for inspecting the [`Writer`] afterwards.
    pub fn attach<'h>(
        self,
        source: &mut impl EventSource<'h>,
    ) -> Rc<RefCell<Self>> {
        let this = Rc::new(RefCell::new(self));
        for kind in [EventKind::SpecEnded, EventKind::SuiteEnded] {
            let writer = Rc::clone(&this);
            source.add_event_listener(
                kind,
                Box::new(move |ev| writer.borrow_mut().handle_event(ev)),
            );
        }
        this
    }

    /// Returns the path the report is written to.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.path
    }

    /// Returns the collected `testcase`s in the order specs have finished.
    #[must_use]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Indicates whether the report has already been written.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }

    /// Records a finished spec.
    pub fn handle_spec_ended(&mut self, identifier: &str, counts: &Counts) {
        let case = TestCase::from_spec(identifier, counts);
        self.executed_specs += 1;
        match case.status {
            Status::Error => self.error_specs += 1,
            Status::Failed => self.failed_specs += 1,
            Status::Skipped => self.skipped_specs += 1,
            Status::Passed => {}
        }
        debug!(
            name = %case.name,
            classname = %case.classname,
            status = %case.status,
            "recorded testcase"
        );
        self.cases.push(case);
    }

    /// Renders the report and writes it into [`JUnit::output_path()`],
    /// creating missing directories and overwriting an existing file.
    ///
    /// # Errors
    ///
    /// If the report cannot be rendered, or the file system refuses to create
    /// the directories or write the file.
    pub fn handle_suite_ended(&mut self) -> WriterResult<()> {
        let xml = self.to_xml()?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty())
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, xml)?;
        self.state = State::Finalized;
        info!(
            path = %self.path.display(),
            tests = self.executed_specs,
            failures = self.failed_specs,
            errors = self.error_specs,
            skipped = self.skipped_specs,
            "JUnit XML report written"
        );
        Ok(())
    }

    /// Renders the report out of the collected specs.
    ///
    /// # Errors
    ///
    /// If XML serialization fails.
    pub fn to_xml(&self) -> WriterResult<Vec<u8>> {
        let mut writer = quick_xml::Writer::new_with_indent(Vec::new(), b' ', 0);
        writer.write_event(XmlEvent::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            None,
        )))?;

        let tests = self.executed_specs.to_string();
        let failures = self.failed_specs.to_string();
        let errors = self.error_specs.to_string();
        let skipped = self.skipped_specs.to_string();
        writer.write_event(XmlEvent::Start(
            BytesStart::new("testsuite").with_attributes([
                ("name", SUITE_NAME),
                ("tests", tests.as_str()),
                ("failures", failures.as_str()),
                ("errors", errors.as_str()),
                ("skipped", skipped.as_str()),
            ]),
        ))?;
        for case in &self.cases {
            case.write_xml(&mut writer)?;
        }
        writer.write_event(XmlEvent::End(BytesEnd::new("testsuite")))?;

        Ok(writer.into_inner())
    }
}
