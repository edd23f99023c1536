//! App script fixups
//!
//! The page's `app.js` has a few template literals whose backticks and `${...}`
//! interpolations were lost, leaving lines like
//!
//!     select.innerHTML = ACCENT_LIBRARY.map(acc => <option value=""></option>).join('');
//!
//! which is not valid JavaScript. [FIXUPS] restores them. Every fixup has an exact
//! form (the whole broken statement) and a looser fallback that only anchors on the
//! broken expression, for copies of the script that were reformatted. Fixups run in
//! table order and each replaces every occurrence.
//!
//! All broken forms contain an unquoted `= <` or `=> <`, which no fixed form does, so
//! patching an already patched script is a no-op.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixup {
    pub name: &'static str,
    pub broken: &'static str,
    pub fixed: &'static str,
}

pub const FIXUPS: &[Fixup] = &[
    Fixup {
        name: "slot-card-header",
        broken: "card.innerHTML = <p><strong>Slot </strong></p>;",
        fixed: "card.innerHTML = `<p><strong>Slot ${index + 1}</strong></p>`;",
    },
    Fixup {
        name: "genre-select",
        broken: "select.innerHTML = <option value=\"\">(none)</option> + GENRE_LIBRARY.map(g => <option value=\"\"></option>).join('');",
        fixed: "select.innerHTML = `<option value=\"\">(none)</option>` + GENRE_LIBRARY.map(g => `\n      <option value=\"${g.name}\">${g.name}</option>`).join('');",
    },
    Fixup {
        name: "premise-select",
        broken: "select.innerHTML = PREMISE_OPTIONS.map(opt => <option value=\"\"></option>).join('');",
        fixed: "select.innerHTML = PREMISE_OPTIONS.map(opt => `\n    <option value=\"${opt}\">${opt}</option>`).join('');",
    },
    Fixup {
        name: "accent-select",
        broken: "select.innerHTML = ACCENT_LIBRARY.map(acc => <option value=\"\"></option>).join('');",
        fixed: "select.innerHTML = ACCENT_LIBRARY.map(acc => `\n    <option value=\"${acc.name}\">${acc.name}</option>`).join('');",
    },
    Fixup {
        name: "slot-card-header-fallback",
        broken: "card.innerHTML = <p><strong>Slot ",
        fixed: "card.innerHTML = `\n      <p><strong>Slot ${index + 1}</strong></p>`;\n      // ",
    },
    Fixup {
        name: "genre-select-none-fallback",
        broken: "select.innerHTML = <option value=\"\">(none)</option> + GENRE_LIBRARY.map",
        fixed: "select.innerHTML = `<option value=\"\">(none)</option>` + GENRE_LIBRARY.map",
    },
    Fixup {
        name: "genre-select-options-fallback",
        broken: "g => <option value=\"\"></option>)",
        fixed: "g => `\n      <option value=\"${g.name}\">${g.name}</option>`)",
    },
    Fixup {
        name: "premise-select-fallback",
        broken: "PREMISE_OPTIONS.map(opt => <option value=\"\"></option>)",
        fixed: "PREMISE_OPTIONS.map(opt => `\n    <option value=\"${opt}\">${opt}</option>`)",
    },
    Fixup {
        name: "accent-select-fallback",
        broken: "ACCENT_LIBRARY.map(acc => <option value=\"\"></option>)",
        fixed: "ACCENT_LIBRARY.map(acc => `\n    <option value=\"${acc.name}\">${acc.name}</option>`)",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFixup {
    pub name: &'static str,
    pub occurrences: usize,
}

/// Patched text plus the fixups that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub text: String,
    pub applied: Vec<AppliedFixup>,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Apply [FIXUPS] to a script's text.
pub fn patch_app_script(text: &str) -> PatchReport {
    apply_fixups(text, FIXUPS)
}

pub fn apply_fixups(text: &str, fixups: &[Fixup]) -> PatchReport {
    let mut patched = text.to_string();
    let mut applied = Vec::new();

    for fixup in fixups {
        let occurrences = patched.matches(fixup.broken).count();
        if occurrences == 0 {
            continue;
        }
        patched = patched.replace(fixup.broken, fixup.fixed);
        debug!(fixup = fixup.name, occurrences, "applied fixup");
        applied.push(AppliedFixup {
            name: fixup.name,
            occurrences,
        });
    }

    PatchReport {
        text: patched,
        applied,
    }
}
