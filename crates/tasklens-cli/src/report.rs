//! Report assembly: walks the backup index and lays decoded records out
//! under Project, Profile and Task headings.

use smol_str::SmolStr;
use tasklens_decode::markup::{escape_html, Styler};
use tasklens_decode::render::canonical_order;
use tasklens_decode::{Engine, LineSink, OutputMode, RecordKind, RenderConfig, ThemeRole};

use crate::backup::{display_name, profile_conditions, profile_task_ids, Backup, ProjectView};

const UNASSIGNED_HEADING: &str = "No Project";

/// Prefixes every line with the report-level indent before passing it on.
struct Indented<'s, S: ?Sized> {
    inner: &'s mut S,
    prefix: String,
}

impl<S: LineSink + ?Sized> LineSink for Indented<'_, S> {
    fn push_line(&mut self, line: String) {
        self.inner.push_line(format!("{}{line}", self.prefix));
    }
}

struct ReportWriter<'e, 'b, 'a, 'input> {
    engine: &'e mut Engine,
    backup: &'b Backup<'a, 'input>,
    config: RenderConfig,
}

impl ReportWriter<'_, '_, '_, '_> {
    fn indent(&self, level: usize) -> String {
        self.config.indent_unit.repeat(level)
    }

    fn heading<S: LineSink + ?Sized>(&self, sink: &mut S, level: usize, text: &str) {
        let styled = Styler::new(&self.config).strong(ThemeRole::Heading, text);
        sink.push_line(format!("{}{styled}", self.indent(level)));
    }

    fn project<S: LineSink + ?Sized>(&mut self, sink: &mut S, project: &ProjectView) {
        self.heading(sink, 0, &format!("Project: {}", project.name));
        let mut profile_tasks = Vec::new();
        for id in &project.profile_ids {
            profile_tasks.extend(self.profile(sink, 1, id));
        }
        for id in project.task_ids.iter().filter(|id| !profile_tasks.contains(*id)) {
            self.task(sink, 1, "Task", id);
        }
        if !project.scene_names.is_empty() {
            let names = project
                .scene_names
                .iter()
                .map(SmolStr::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            self.heading(sink, 1, &format!("Scenes: {names}"));
        }
    }

    /// Render one profile and return the ids of the tasks it runs.
    fn profile<S: LineSink + ?Sized>(
        &mut self,
        sink: &mut S,
        level: usize,
        id: &str,
    ) -> Vec<SmolStr> {
        let Some(profile) = self.backup.profile(id) else {
            tracing::warn!(profile = id, "project lists a missing profile");
            self.heading(sink, level, &format!("Profile #{id} (missing)"));
            return Vec::new();
        };
        self.heading(sink, level, &format!("Profile: {}", display_name(profile)));

        let conditions = profile_conditions(profile);
        for &(condition, kind) in &conditions {
            self.engine.observe(condition, kind);
        }
        let mut indented = Indented {
            inner: &mut *sink,
            prefix: self.indent(level + 1),
        };
        let decoder = self.engine.decoder();
        for condition in canonical_order(conditions.iter().map(|(node, _)| *node)) {
            let kind = if condition.tag_name().name() == RecordKind::State.element_tag() {
                RecordKind::State
            } else {
                RecordKind::Event
            };
            for line in decoder.decode(condition, kind).lines {
                indented.push_line(line);
            }
        }

        let tasks = profile_task_ids(profile);
        for (slot, task_id) in &tasks {
            self.task(sink, level + 1, slot.heading(), task_id);
        }
        tasks.into_iter().map(|(_, task_id)| task_id).collect()
    }

    fn task<S: LineSink + ?Sized>(&mut self, sink: &mut S, level: usize, label: &str, id: &str) {
        let Some(task) = self.backup.task(id) else {
            tracing::warn!(task = id, "reference to a missing task");
            self.heading(sink, level, &format!("{label}: #{id} (missing)"));
            return;
        };
        self.heading(sink, level, &format!("{label}: {}", display_name(task)));
        let mut indented = Indented {
            inner: &mut *sink,
            prefix: self.indent(level + 1),
        };
        self.engine.render_task(task, &mut indented);
    }

    fn unassigned<S: LineSink + ?Sized>(&mut self, sink: &mut S) {
        let profiles = self.backup.unassigned_profiles();
        let tasks = self.backup.unassigned_tasks();
        if profiles.is_empty() && tasks.is_empty() {
            return;
        }
        self.heading(sink, 0, UNASSIGNED_HEADING);
        for id in &profiles {
            self.profile(sink, 1, id);
        }
        for id in &tasks {
            self.task(sink, 1, "Task", id);
        }
    }
}

/// Render the whole backup into `sink`.
pub fn render_report<S>(backup: &Backup<'_, '_>, engine: &mut Engine, sink: &mut S)
where
    S: LineSink + ?Sized,
{
    let config = engine.config().clone();
    let mut writer = ReportWriter {
        engine,
        backup,
        config,
    };
    for project in &backup.projects {
        writer.project(sink, project);
    }
    writer.unassigned(sink);
}

/// Wrap rendered lines into the final document for `mode`.
#[must_use]
pub fn document(title: &str, lines: &[String], mode: OutputMode) -> String {
    match mode {
        OutputMode::Plain => {
            let mut out = lines.join("\n");
            out.push('\n');
            out
        }
        OutputMode::Html => {
            let mut out =
                String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
            out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
            out.push_str("</head>\n<body style=\"font-family:monospace\">\n");
            for line in lines {
                out.push_str(line);
                out.push_str("<br>\n");
            }
            out.push_str("</body>\n</html>\n");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_document_ends_with_newline() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(document("t", &lines, OutputMode::Plain), "a\nb\n");
    }

    #[test]
    fn html_document_escapes_title() {
        let html = document("A & B", &["x".to_string()], OutputMode::Html);
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("x<br>\n"));
    }

    #[test]
    fn indented_sink_prefixes_lines() {
        let mut lines: Vec<String> = Vec::new();
        let mut sink = Indented {
            inner: &mut lines,
            prefix: "  ".to_string(),
        };
        sink.push_line("x".to_string());
        assert_eq!(lines, vec!["  x"]);
    }
}
