use leptos::prelude::*;

/// Who owns the global search text.
#[derive(Clone)]
pub enum SearchMode {
    /// The parent owns the value; the table only reports edits.
    Controlled {
        value: Signal<String>,
        on_change: Callback<String>,
    },
    /// The table keeps the value itself.
    Uncontrolled { initial: String },
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Uncontrolled {
            initial: String::new(),
        }
    }
}

/// One read signal and one setter, whatever the mode.
#[derive(Clone, Copy)]
pub struct ResolvedSearch {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

impl SearchMode {
    pub fn controlled(value: impl Into<Signal<String>>, on_change: Callback<String>) -> Self {
        SearchMode::Controlled {
            value: value.into(),
            on_change,
        }
    }

    /// Must run inside a reactive owner; uncontrolled mode creates a signal.
    pub fn resolve(self) -> ResolvedSearch {
        match self {
            SearchMode::Controlled { value, on_change } => ResolvedSearch {
                value,
                set: on_change,
            },
            SearchMode::Uncontrolled { initial } => {
                let local = RwSignal::new(initial);
                ResolvedSearch {
                    value: local.into(),
                    set: Callback::new(move |next: String| local.set(next)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_keeps_its_own_value() {
        let owner = Owner::new();
        owner.with(|| {
            let search = SearchMode::Uncontrolled {
                initial: "steel".into(),
            }
            .resolve();
            assert_eq!(search.value.get_untracked(), "steel");
            search.set.run("rebar".into());
            assert_eq!(search.value.get_untracked(), "rebar");
        });
    }

    #[test]
    fn test_controlled_delegates_to_parent() {
        let owner = Owner::new();
        owner.with(|| {
            let parent = RwSignal::new(String::from("north"));
            let reported = RwSignal::new(Vec::<String>::new());
            let mode = SearchMode::controlled(
                parent,
                Callback::new(move |next: String| reported.update(|r| r.push(next))),
            );
            assert!(matches!(mode, SearchMode::Controlled { .. }));

            let search = mode.resolve();
            search.set.run("south".into());
            // the parent has not applied the edit yet
            assert_eq!(search.value.get_untracked(), "north");
            assert_eq!(reported.get_untracked(), vec!["south".to_string()]);

            parent.set("south".into());
            assert_eq!(search.value.get_untracked(), "south");
        });
    }
}
