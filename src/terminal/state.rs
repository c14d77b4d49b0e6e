use crate::intake::{IntakeForm, detect_source, source_choices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Company,
    Role,
    Location,
    Timezone,
    Source,
    Resume,
    DroppedResume,
    AutoRefresh,
}

impl Field {
    pub const ORDER: [Field; 8] = [
        Field::Company,
        Field::Role,
        Field::Location,
        Field::Timezone,
        Field::Source,
        Field::Resume,
        Field::DroppedResume,
        Field::AutoRefresh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Company => "Company",
            Field::Role => "Role",
            Field::Location => "Location",
            Field::Timezone => "Timezone",
            Field::Source => "Source",
            Field::Resume => "Resume",
            Field::DroppedResume => "Add Resume (path)",
            Field::AutoRefresh => "Auto-refresh",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn step(self, delta: isize) -> Field {
        let len = Self::ORDER.len() as isize;
        let i = (self.index() as isize + delta).rem_euclid(len);
        Self::ORDER[i as usize]
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Company
                | Field::Role
                | Field::Location
                | Field::Timezone
                | Field::DroppedResume
        )
    }
}

/// Which field has the keyboard.
#[derive(Debug, Default)]
pub struct FormState {
    pub focus: Field,
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(-1);
    }
}

pub fn text_mut(form: &mut IntakeForm, field: Field) -> Option<&mut String> {
    match field {
        Field::Company => Some(&mut form.company),
        Field::Role => Some(&mut form.role),
        Field::Location => Some(&mut form.location),
        Field::Timezone => Some(&mut form.timezone),
        Field::DroppedResume => Some(&mut form.dropped_resume),
        _ => None,
    }
}

/// Move through the source choices, detected source first.
pub fn cycle_source(form: &mut IntakeForm, delta: isize) {
    let choices = source_choices(detect_source(&form.url));
    let len = choices.len() as isize;
    let next = match choices.iter().position(|c| *c == form.source) {
        Some(i) => (i as isize + delta).rem_euclid(len),
        None => 0,
    };
    form.source = choices[next as usize].clone();
}

/// Move through "None" followed by every resume in the folder.
pub fn cycle_resume(form: &mut IntakeForm, delta: isize) {
    let len = form.resumes.len() as isize + 1;
    let current = form.selected_resume.map_or(0, |i| i as isize + 1);
    let next = (current + delta).rem_euclid(len);
    form.selected_resume = if next == 0 {
        None
    } else {
        Some(next as usize - 1)
    };
}

/// Text shown for `field` in the form.
pub fn display_value(form: &IntakeForm, field: Field, auto_refresh: bool) -> String {
    match field {
        Field::Company => form.company.clone(),
        Field::Role => form.role.clone(),
        Field::Location => form.location.clone(),
        Field::Timezone => form.timezone.clone(),
        Field::DroppedResume => form.dropped_resume.clone(),
        Field::Source => format!("< {} >", form.source),
        Field::Resume => format!("< {} >", form.selected_resume_name().unwrap_or("None")),
        Field::AutoRefresh => {
            let mark = if auto_refresh { "x" } else { " " };
            format!("[{mark}] Auto-refresh on URL change")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> IntakeForm {
        IntakeForm {
            url: "https://www.linkedin.com/jobs/view/42".into(),
            source: "LinkedIn".into(),
            ..Default::default()
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut s = FormState::default();
        s.focus_prev();
        assert_eq!(s.focus, Field::AutoRefresh);
        s.focus_next();
        assert_eq!(s.focus, Field::Company);
    }

    #[test]
    fn only_free_text_fields_are_editable() {
        let mut f = form();
        text_mut(&mut f, Field::Role).unwrap().push_str("SRE");
        assert_eq!(f.role, "SRE");
        assert!(text_mut(&mut f, Field::Source).is_none());
        assert!(Field::DroppedResume.is_text());
        assert!(!Field::Resume.is_text());
    }

    #[test]
    fn source_cycles_from_detected_choice() {
        let mut f = form();
        cycle_source(&mut f, 1);
        assert_eq!(f.source, "Indeed");
        cycle_source(&mut f, -2);
        assert_eq!(f.source, "Other");
        cycle_source(&mut f, 1);
        assert_eq!(f.source, "LinkedIn");
    }

    #[test]
    fn resume_selector_includes_none() {
        let mut f = form();
        f.set_resumes(vec!["a.pdf".into(), "b.pdf".into()]);
        assert_eq!(f.selected_resume_name(), Some("a.pdf"));
        cycle_resume(&mut f, 1);
        assert_eq!(f.selected_resume_name(), Some("b.pdf"));
        cycle_resume(&mut f, 1);
        assert_eq!(f.selected_resume, None);
        assert_eq!(display_value(&f, Field::Resume, true), "< None >");
        cycle_resume(&mut f, -1);
        assert_eq!(f.selected_resume_name(), Some("b.pdf"));
    }

    #[test]
    fn checkbox_reflects_preference() {
        let f = form();
        assert!(display_value(&f, Field::AutoRefresh, true).starts_with("[x]"));
        assert!(display_value(&f, Field::AutoRefresh, false).starts_with("[ ]"));
    }
}
