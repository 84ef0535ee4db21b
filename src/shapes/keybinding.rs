use {
    crate::shapes::enums::ScreenActionEnum,
    crokey::*,
    serde::{Deserialize, Serialize},
    std::{
        collections::{HashMap, HashSet},
        fmt,
    },
};

/// A mapping from key combinations to actions.
///
/// Several key combinations can go to the same action. The lookup map is
/// only filled in by [`KeyBindings::slice`], so each screen resolves keys
/// against the actions it actually offers.
#[derive(Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    #[serde(skip)]
    map: HashMap<KeyCombination, ScreenActionEnum>,
    #[serde(flatten)]
    default_bindings: HashMap<ScreenActionEnum, HashSet<KeyCombination>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.set(ScreenActionEnum::Quit, key!(ctrl - q));
        bindings.set(ScreenActionEnum::Quit, key!(q));
        bindings.set(ScreenActionEnum::Back, key!(esc));
        bindings.set(ScreenActionEnum::Confirm, key!(enter));
        bindings.set(ScreenActionEnum::Up, key!(up));
        bindings.set(ScreenActionEnum::Down, key!(down));
        bindings.set(ScreenActionEnum::Previous, key!(left));
        bindings.set(ScreenActionEnum::Previous, key!(shift - backtab));
        bindings.set(ScreenActionEnum::Next, key!(right));
        bindings.set(ScreenActionEnum::Next, key!(tab));
        bindings.set(ScreenActionEnum::CycleMark, key!(space));
        bindings.set(ScreenActionEnum::NewPlayer, key!(n));
        bindings.set(ScreenActionEnum::RenamePlayer, key!(r));
        bindings.set(ScreenActionEnum::RemovePlayer, key!(d));
        bindings.set(ScreenActionEnum::AddTrainingDate, key!(t));
        bindings.set(ScreenActionEnum::RemoveTrainingDate, key!(x));
        bindings.set(ScreenActionEnum::SignIn, key!(g));
        bindings.set(ScreenActionEnum::SignOut, key!(o));
        bindings.set(ScreenActionEnum::SaveToDrive, key!(s));
        bindings.set(ScreenActionEnum::LoadFromDrive, key!(l));
        bindings.set(ScreenActionEnum::ExportToSheets, key!(e));
        bindings.set(ScreenActionEnum::ExportCsv, key!(c));
        bindings.set(ScreenActionEnum::Settings, key!(p));
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::default(),
            default_bindings: HashMap::new(),
        }
    }

    pub fn set<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) -> bool {
        self.default_bindings
            .entry(action.into())
            .or_default()
            .insert(ck)
    }

    fn set_to_map<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) {
        let action_enum = action.into();
        self.map.entry(ck).or_insert(action_enum);
    }

    pub fn get(&self, key: KeyCombination) -> Option<&ScreenActionEnum> {
        self.map.get(&key)
    }

    /// return the key combination for the action, choosing the one with the
    /// shortest Display representation.
    pub fn shortest_key_for(&self, action: &ScreenActionEnum) -> Option<KeyCombination> {
        self.default_bindings.get(action).and_then(|cks| {
            cks.iter()
                .min_by_key(|ck| {
                    let s = ck.to_string();
                    (s.len(), s)
                })
                .copied()
        })
    }

    /// Every key combination bound to the action, shortest first.
    pub fn keys_for(&self, action: &ScreenActionEnum) -> Vec<KeyCombination> {
        let mut keys: Vec<KeyCombination> = self
            .default_bindings
            .get(action)
            .map(|cks| cks.iter().copied().collect())
            .unwrap_or_default();
        keys.sort_by_key(|ck| {
            let s = ck.to_string();
            (s.len(), s)
        });
        keys
    }

    pub fn slice(&self, actions: &[ScreenActionEnum]) -> KeyBindings {
        let mut slice = KeyBindings::empty();
        for (action, cks) in &self.default_bindings {
            if actions.contains(action) {
                cks.iter().for_each(|ck| slice.set_to_map(*action, *ck));
            }
        }
        slice
    }
}

impl fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("KeyBindings");
        for (kc, action) in &self.map {
            ds.field(&kc.to_string(), &action);
        }
        ds.finish()
    }
}

#[test]
fn test_deserialize_keybindings() {
    #[derive(Deserialize)]
    struct Config {
        keybindings: KeyBindings,
    }
    let json = r#"
    {
        "keybindings": {
            "cycle_mark": ["space", "enter"],
            "quit": ["q", "ctrl-q"]
        }
    }
    "#;
    let conf = serde_json::from_str::<Config>(json).unwrap();
    assert_eq!(conf.keybindings.shortest_key_for(&ScreenActionEnum::Back), None);
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Quit),
        Some(key!(q))
    );
    let slice = conf.keybindings.slice(&[ScreenActionEnum::CycleMark]);
    assert_eq!(slice.get(key!(enter)), Some(&ScreenActionEnum::CycleMark));
    assert_eq!(slice.get(key!(q)), None);
}
