use std::collections::HashSet;
use std::fmt;

use crate::foundation::error::{SceneError, SceneResult};
use crate::spec::model::{Element, GroupItemKind, LayoutSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathElem {
    Field(&'static str),
    Index(usize),
}

/// One structural problem found in a [`LayoutSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecIssue {
    /// JSON-path-like location, e.g. `$.scenes[0].elements[2]`.
    pub path: String,
    pub message: String,
}

impl SpecIssue {
    fn at(path: &[PathElem], message: impl Into<String>) -> Self {
        Self {
            path: format_path(path),
            message: message.into(),
        }
    }
}

impl fmt::Display for SpecIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn format_path(path: &[PathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            PathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            PathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

impl LayoutSpec {
    /// Check the document for timeline and reference consistency.
    ///
    /// Compilation never calls this; it is the strict front door for untrusted documents.
    pub fn validate(&self) -> SceneResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            return Ok(());
        }
        let joined = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(SceneError::validation(joined))
    }

    /// Every problem found, in document order.
    pub fn issues(&self) -> Vec<SpecIssue> {
        let mut out = Vec::new();
        let mut path = vec![PathElem::Field("meta")];

        if self.meta.resolution.width == 0 || self.meta.resolution.height == 0 {
            path.push(PathElem::Field("resolution"));
            out.push(SpecIssue::at(&path, "width and height must be > 0"));
            path.pop();
        }
        if self.meta.fps == 0 {
            path.push(PathElem::Field("fps"));
            out.push(SpecIssue::at(&path, "must be > 0"));
            path.pop();
        }
        path.pop();

        let svgs = self
            .assets
            .svgs
            .iter()
            .map(|a| a.id.as_str())
            .collect::<HashSet<_>>();
        let images = self
            .assets
            .images
            .iter()
            .map(|a| a.id.as_str())
            .collect::<HashSet<_>>();
        let audio = self
            .assets
            .audio
            .iter()
            .map(|a| a.id.as_str())
            .collect::<HashSet<_>>();

        path.push(PathElem::Field("assets"));
        path.push(PathElem::Field("svgs"));
        for (i, svg) in self.assets.svgs.iter().enumerate() {
            if !(svg.width > 0.0 && svg.height > 0.0) {
                path.push(PathElem::Index(i));
                out.push(SpecIssue::at(
                    &path,
                    format!("svg '{}' must declare width and height > 0", svg.id),
                ));
                path.pop();
            }
        }
        path.clear();

        path.push(PathElem::Field("scenes"));
        for (si, scene) in self.scenes.iter().enumerate() {
            path.push(PathElem::Index(si));
            if scene.start_time < 0.0 {
                out.push(SpecIssue::at(&path, "startTime must be >= 0"));
            }
            if scene.duration <= 0.0 {
                out.push(SpecIssue::at(&path, "duration must be > 0"));
            }
            if let Some(a) = &scene.audio {
                path.push(PathElem::Field("audio"));
                if !audio.contains(a.asset_id.as_str()) {
                    out.push(SpecIssue::at(
                        &path,
                        format!("references undeclared audio asset '{}'", a.asset_id),
                    ));
                }
                if let Some(v) = a.volume
                    && !(0.0..=1.0).contains(&v)
                {
                    path.push(PathElem::Field("volume"));
                    out.push(SpecIssue::at(&path, format!("must be within [0, 1], got {v}")));
                    path.pop();
                }
                path.pop();
            }

            path.push(PathElem::Field("elements"));
            for (ei, el) in scene.elements.iter().enumerate() {
                path.push(PathElem::Index(ei));
                let (start, duration) = el.timing();
                if start < 0.0 {
                    out.push(SpecIssue::at(&path, "startTime must be >= 0"));
                }
                if duration <= 0.0 {
                    out.push(SpecIssue::at(&path, "duration must be > 0"));
                }
                if start + duration > scene.duration {
                    out.push(SpecIssue::at(
                        &path,
                        format!("element exceeds duration of scene '{}'", scene.id),
                    ));
                }

                match el {
                    Element::Svg(e) if !svgs.contains(e.asset_id.as_str()) => {
                        out.push(SpecIssue::at(
                            &path,
                            format!("references undeclared svg asset '{}'", e.asset_id),
                        ));
                    }
                    Element::Image(e) if !images.contains(e.asset_id.as_str()) => {
                        out.push(SpecIssue::at(
                            &path,
                            format!("references undeclared image asset '{}'", e.asset_id),
                        ));
                    }
                    Element::Group(g) => {
                        path.push(PathElem::Field("items"));
                        for (ii, item) in g.items.iter().enumerate() {
                            let Some(id) = item.asset_id.as_deref() else {
                                continue;
                            };
                            let declared = match item.kind {
                                GroupItemKind::Svg => svgs.contains(id),
                                GroupItemKind::Image => images.contains(id),
                                GroupItemKind::Text => true,
                            };
                            if !declared {
                                path.push(PathElem::Index(ii));
                                out.push(SpecIssue::at(
                                    &path,
                                    format!("references undeclared asset '{id}'"),
                                ));
                                path.pop();
                            }
                        }
                        path.pop();
                    }
                    _ => {}
                }
                path.pop();
            }
            path.pop();
            path.pop();
        }

        let mut order = (0..self.scenes.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| {
            self.scenes[a]
                .start_time
                .total_cmp(&self.scenes[b].start_time)
        });
        for pair in order.windows(2) {
            let (cur, next) = (&self.scenes[pair[0]], &self.scenes[pair[1]]);
            if cur.start_time + cur.duration > next.start_time {
                out.push(SpecIssue::at(
                    &[PathElem::Field("scenes"), PathElem::Index(pair[1])],
                    format!("scenes '{}' and '{}' overlap in timeline", cur.id, next.id),
                ));
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/validate.rs"]
mod tests;
