//! The collision scan: read each stylesheet, collect its classes, report overlaps.

use std::io::Write;

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::context::ServiceContext;
use crate::report::CollisionReport;
use crate::scan::{extract_classes, ClassOccurrenceMap};

/// Scans the configured stylesheets for class names shared between files.
pub struct ClassNameCollisionScanner<'a> {
    ctx: &'a ServiceContext,
    config: &'a ScanConfig,
}

impl<'a> ClassNameCollisionScanner<'a> {
    /// Creates a scanner reading through `ctx.fs`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a ScanConfig) -> Self {
        Self { ctx, config }
    }

    /// Reads every configured file, in order, and records its classes.
    ///
    /// Files that cannot be read contribute nothing. The failure is only
    /// visible as a `debug` event.
    #[must_use]
    pub fn scan(&self) -> ClassOccurrenceMap {
        let mut map = ClassOccurrenceMap::new();
        let mut read = 0_usize;

        for file in &self.config.files {
            let path = self.config.root.join(file);
            let content = match self.ctx.fs.read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    debug!(file = %file, path = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            read += 1;

            let classes = extract_classes(&content);
            debug!(file = %file, classes = classes.len(), "scanned file");
            map.record_file(file, classes);
        }

        info!(
            files = self.config.files.len(),
            read,
            classes = map.len(),
            "scan finished"
        );
        map
    }

    /// Scans, then writes the report to `out` in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error string if the report cannot be rendered or written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CollisionReport, String> {
        let report = CollisionReport::from_occurrences(&self.scan());
        let rendered = report.render(self.config.format)?;
        out.write_all(rendered.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| format!("failed to write report: {e}"))?;
        Ok(report)
    }
}
