use std::{collections::HashMap, time::Duration};

use crate::interpreter::value::core::Value;

/// A host automation action, independent of how a program spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Capture the screen.
    Screenshot,
    /// Click at a position.
    Click,
    /// Move the pointer.
    Move,
    /// Pause for a number of seconds.
    Wait,
    /// Type text.
    Type,
    /// Press a key.
    Press,
    /// Look up a window by title.
    GetWindow,
}

impl Action {
    /// Every action.
    pub const ALL: [Self; 7] = [Self::Screenshot,
                                Self::Click,
                                Self::Move,
                                Self::Wait,
                                Self::Type,
                                Self::Press,
                                Self::GetWindow];

    /// The English name, which is also one of the accepted aliases.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Screenshot => "screenshot",
            Self::Click => "click",
            Self::Move => "move",
            Self::Wait => "wait",
            Self::Type => "type",
            Self::Press => "press",
            Self::GetWindow => "get_window",
        }
    }

    /// Localized names in Chinese, Japanese, Korean and Russian order.
    const fn localized(self) -> [&'static str; 4] {
        match self {
            Self::Screenshot => ["截图", "スクリーンショット", "스크린샷", "снимок"],
            Self::Click => ["点击", "クリック", "클릭", "клик"],
            Self::Move => ["移动", "移動", "이동", "переместить"],
            Self::Wait => ["等待", "待機", "대기", "ждать"],
            Self::Type => ["输入", "入力", "입력", "ввод"],
            Self::Press => ["按键", "押す", "키누르기", "нажать"],
            Self::GetWindow => ["获取窗口", "ウィンドウ取得", "창가져오기", "окно"],
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A recoverable failure of a host capability.
///
/// Neither variant stops the program: the host prints a notice and execution
/// continues with the next statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The action cannot run in this environment.
    #[error("{0}")]
    Unavailable(String),
    /// The action ran and failed.
    #[error("{0}")]
    Failed(String),
}

/// Something that can carry out a host action.
///
/// Arguments arrive exactly as the program passed them, in order, without
/// any type validation. Any `FnMut(&[Value]) -> Result<Value, CapabilityError>`
/// closure is a capability.
pub trait Capability {
    /// Performs the action.
    fn call(&mut self, args: &[Value]) -> Result<Value, CapabilityError>;
}

impl<F> Capability for F where F: FnMut(&[Value]) -> Result<Value, CapabilityError>
{
    fn call(&mut self, args: &[Value]) -> Result<Value, CapabilityError> {
        self(args)
    }
}

/// Maps localized automation names to actions, and actions to providers.
///
/// Resolution happens in two steps. A name that has no alias is unknown and
/// is a fatal error for the program. A name that resolves to an action
/// without a provider is merely unavailable.
///
/// # Example
/// ```
/// use novolang::interpreter::{
///     capability::{Action, CapabilityError, CapabilityTable},
///     value::core::Value,
/// };
///
/// let mut table = CapabilityTable::new();
/// table.provide(Action::Click, |_: &[Value]| Ok(Value::Null));
///
/// assert_eq!(table.invoke("点击", &[Value::from(1.0)]), Some(Ok(Value::Null)));
/// assert!(matches!(table.invoke("截图", &[]), Some(Err(CapabilityError::Unavailable(_)))));
/// assert_eq!(table.invoke("nope", &[]), None);
/// ```
pub struct CapabilityTable {
    aliases:   HashMap<String, Action>,
    providers: HashMap<Action, Box<dyn Capability>>,
}

impl std::fmt::Debug for CapabilityTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityTable")
         .field("aliases", &self.aliases.len())
         .field("providers", &self.providers.keys().collect::<Vec<_>>())
         .finish()
    }
}

/// The full alias set plus the built-in `wait` provider.
impl Default for CapabilityTable {
    fn default() -> Self {
        let mut table = Self::new();
        table.provide(Action::Wait, sleep);
        table
    }
}

impl CapabilityTable {
    /// Creates a table that knows every built-in alias but has no providers,
    /// so every action reports unavailable.
    #[must_use]
    pub fn new() -> Self {
        let aliases = Action::ALL.into_iter()
                                 .flat_map(|action| {
                                     std::iter::once(action.name()).chain(action.localized())
                                                                   .map(move |alias| {
                                                                       (alias.to_string(), action)
                                                                   })
                                 })
                                 .collect();

        Self { aliases,
               providers: HashMap::new() }
    }

    /// Adds another name for `action`, replacing any previous meaning of
    /// `alias`.
    pub fn alias(&mut self, alias: impl Into<String>, action: Action) -> &mut Self {
        self.aliases.insert(alias.into(), action);
        self
    }

    /// Installs the provider for `action`, replacing any previous one.
    pub fn provide(&mut self, action: Action, provider: impl Capability + 'static) -> &mut Self {
        self.providers.insert(action, Box::new(provider));
        self
    }

    /// Resolves a localized name to its action.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Action> {
        self.aliases.get(name).copied()
    }

    /// Invokes the action named `name`.
    ///
    /// # Returns
    /// - `None` if `name` is not a known alias.
    /// - `Some(Err(CapabilityError::Unavailable))` if the action has no
    ///   provider.
    /// - Otherwise, whatever the provider returns.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Option<Result<Value, CapabilityError>> {
        let action = self.resolve(name)?;
        let Some(provider) = self.providers.get_mut(&action) else {
            return Some(Err(CapabilityError::Unavailable(format!("no provider for {action}"))));
        };
        Some(provider.call(args))
    }
}

/// The built-in `wait` provider: blocks for the given number of seconds.
fn sleep(args: &[Value]) -> Result<Value, CapabilityError> {
    let Some(Value::Number(seconds)) = args.first() else {
        return Err(CapabilityError::Failed("expected a number of seconds".to_string()));
    };
    let duration =
        Duration::try_from_secs_f64(*seconds).map_err(|e| CapabilityError::Failed(e.to_string()))?;
    std::thread::sleep(duration);
    Ok(Value::Null)
}
