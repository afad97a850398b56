use serde::{Deserialize, Serialize};

use super::AnswerKey;

/// Separator between a question key and the option discriminator in a group name.
pub const GROUP_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleKind {
    Radio,
    Checkbox,
}

/// One answer toggle as rendered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleControl {
    pub name: String,
    pub kind: ToggleKind,
    #[serde(default)]
    pub checked: bool,
    /// Label shown next to the toggle. Snapshots may omit it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl ToggleControl {
    pub fn radio(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: ToggleKind::Radio,
            checked,
            label: String::new(),
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: ToggleKind::Checkbox,
            checked,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A section heading in the rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSection {
    pub title: String,
    /// Index of the first control of this section in [`Form::controls`].
    pub first_control: usize,
}

/// The answer toggles of a quiz, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    controls: Vec<ToggleControl>,
    sections: Vec<FormSection>,
}

impl Form {
    pub fn from_controls(controls: Vec<ToggleControl>) -> Self {
        Self {
            controls,
            sections: Vec::new(),
        }
    }

    /// Build the form for an answer key.
    ///
    /// Multi-select questions get one checkbox per answer named `<key>-<i>`,
    /// every other question gets a radio group sharing the bare name `<key>`.
    pub fn from_answer_key(answer_key: &AnswerKey) -> Self {
        let mut controls = Vec::new();
        let mut sections = Vec::with_capacity(answer_key.len());

        for (key, question) in answer_key.iter() {
            sections.push(FormSection {
                title: question.text.clone(),
                first_control: controls.len(),
            });

            let multi = question.is_multi_select();
            for (index, answer) in question.answers.iter().enumerate() {
                let control = if multi {
                    ToggleControl::checkbox(format!("{key}{GROUP_SEPARATOR}{index}"), false)
                } else {
                    ToggleControl::radio(key.clone(), false)
                };
                controls.push(control.with_label(answer.text.clone()));
            }
        }

        Self { controls, sections }
    }

    pub fn controls(&self) -> &[ToggleControl] {
        &self.controls
    }

    pub fn sections(&self) -> &[FormSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Toggle the control at `index` the way a browser does on click.
    ///
    /// A radio becomes checked and clears the other radios sharing its name.
    /// A checkbox flips.
    pub fn toggle(&mut self, index: usize) {
        let Some(control) = self.controls.get(index) else {
            return;
        };

        match control.kind {
            ToggleKind::Checkbox => {
                self.controls[index].checked = !self.controls[index].checked;
            }
            ToggleKind::Radio => {
                let name = control.name.clone();
                for (position, other) in self.controls.iter_mut().enumerate() {
                    if other.kind == ToggleKind::Radio && other.name == name {
                        other.checked = position == index;
                    }
                }
            }
        }
    }

    pub fn clear(&mut self) {
        for control in &mut self.controls {
            control.checked = false;
        }
    }
}
