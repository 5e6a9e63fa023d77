use super::docs::Topic;
use std::fmt::{self, Write};

/// Line-oriented YAML builder. Annotation lines are only written in annotate mode.
pub struct YamlWriter {
    out: String,
    annotate: bool,
}

impl YamlWriter {
    pub fn new(annotate: bool) -> Self {
        Self {
            out: String::new(),
            annotate,
        }
    }

    pub fn line(&mut self, indent: usize, text: impl fmt::Display) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}", "", text, indent = indent)
    }

    pub fn field(&mut self, indent: usize, key: &str, value: impl fmt::Display) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}: {}", "", key, value, indent = indent)
    }

    pub fn heading(&mut self, indent: usize, key: &str) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}:", "", key, indent = indent)
    }

    pub fn note(&mut self, indent: usize, topic: Topic) -> fmt::Result {
        self.note_with(indent, topic.note(), topic)
    }

    pub fn note_with(&mut self, indent: usize, text: &str, topic: Topic) -> fmt::Result {
        if !self.annotate {
            return Ok(());
        }
        writeln!(self.out, "{:indent$}# {}", "", text, indent = indent)?;
        if let Some(url) = topic.doc_url() {
            writeln!(self.out, "{:indent$}# Doc: {}", "", url, indent = indent)?;
        }
        Ok(())
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// True for lines written by [`YamlWriter::note`]
pub fn is_annotation(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut w = YamlWriter::new(false);
        w.heading(0, "spec").unwrap();
        w.field(2, "restartPolicy", "Never").unwrap();
        w.line(2, "- name: web").unwrap();
        assert_eq!(w.finish(), "spec:\n  restartPolicy: Never\n  - name: web\n");
    }

    #[test]
    fn test_notes_follow_annotate_flag() {
        let mut w = YamlWriter::new(false);
        w.note(2, Topic::Labels).unwrap();
        assert_eq!(w.finish(), "");

        let mut w = YamlWriter::new(true);
        w.note(2, Topic::Labels).unwrap();
        w.note(0, Topic::Spec).unwrap();
        let out = w.finish();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  # Key/value"));
        assert!(lines[1].starts_with("  # Doc: https://"));
        assert_eq!(lines[2], "# The desired state of the Pod");
        assert!(lines.iter().all(|l| is_annotation(l)));
    }
}
