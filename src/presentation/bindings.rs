use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use crate::application::{BudgetCoordinator, is_user_error};
use crate::config::{AppConfig, Selectors};
use crate::domain::ledger::{Ledger, TimestampIdGenerator};
use crate::domain::logging::{LogComponent, get_logger, set_min_level};
use crate::domain::{AppError, AppResult};
use crate::infrastructure::BrowserRandom;
use crate::infrastructure::ui::DomBudgetView;
use crate::infrastructure::ui::dom_view::document;

pub type DomCoordinator = BudgetCoordinator<DomBudgetView>;
pub type SharedCoordinator = Rc<RefCell<DomCoordinator>>;

/// A running budget app: the coordinator plus the listeners feeding it.
///
/// Dropping it detaches every listener.
pub struct BudgetApp {
    coordinator: SharedCoordinator,
    _listeners: Vec<EventListener>,
}

impl BudgetApp {
    pub fn start(config: AppConfig) -> AppResult<Self> {
        set_min_level(config.log_level);

        let ledger = Ledger::new(TimestampIdGenerator::new(BrowserRandom));
        let view = DomBudgetView::new(config.selectors.clone());
        let mut coordinator = BudgetCoordinator::new(ledger, view)
            .with_invalid_input_message(config.invalid_input_message.clone());
        coordinator.initialize()?;

        let coordinator = Rc::new(RefCell::new(coordinator));
        let listeners = attach_listeners(&coordinator, &config.selectors)?;

        get_logger().info(
            LogComponent::Presentation("BudgetApp"),
            &format!("Attached {} event listeners", listeners.len()),
        );

        Ok(Self { coordinator, _listeners: listeners })
    }

    pub fn coordinator(&self) -> &SharedCoordinator {
        &self.coordinator
    }
}

fn attach_listeners(
    coordinator: &SharedCoordinator,
    selectors: &Selectors,
) -> AppResult<Vec<EventListener>> {
    let document = document()?;
    let query = |selector: &str| -> AppResult<Element> {
        document
            .query_selector(selector)?
            .ok_or_else(|| AppError::ElementNotFound(selector.to_string()))
    };
    let submit_button = query(&selectors.input_button)?;
    let container = query(&selectors.container)?;
    let type_input = query(&selectors.input_type)?;

    let on_submit = {
        let coordinator = coordinator.clone();
        EventListener::new(&submit_button, "click", move |_| {
            dispatch(&coordinator, "add", |c| c.add_entry_from_input().map(drop));
        })
    };

    let on_enter = {
        let coordinator = coordinator.clone();
        EventListener::new(&document, "keypress", move |event| {
            if is_enter_key(event) {
                dispatch(&coordinator, "add", |c| c.add_entry_from_input().map(drop));
            }
        })
    };

    let on_delete = {
        let coordinator = coordinator.clone();
        let icon_selector = selectors.delete_icon.clone();
        let key_attribute = selectors.entry_key_attribute.clone();
        EventListener::new(&container, "click", move |event| {
            let Some(key) = delete_key(event, &icon_selector, &key_attribute) else {
                return;
            };
            dispatch(&coordinator, "delete", |c| c.delete_entry_by_key(&key));
        })
    };

    let on_type_change = {
        let coordinator = coordinator.clone();
        EventListener::new(&type_input, "change", move |_| {
            dispatch(&coordinator, "toggle", |c| c.toggle_input_highlight());
        })
    };

    Ok(vec![on_submit, on_enter, on_delete, on_type_change])
}

fn is_enter_key(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|e| e.key() == "Enter" || e.key_code() == 13)
}

/// Composite key carried by the clicked delete icon, if that is what was clicked.
fn delete_key(event: &Event, icon_selector: &str, key_attribute: &str) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    if !target.matches(icon_selector).unwrap_or(false) {
        return None;
    }
    target.get_attribute(key_attribute)
}

/// Runs one flow to completion, logging whatever it returned.
fn dispatch(
    coordinator: &SharedCoordinator,
    action: &'static str,
    flow: impl FnOnce(&mut DomCoordinator) -> AppResult<()>,
) {
    let Ok(mut coordinator) = coordinator.try_borrow_mut() else {
        get_logger().warn(
            LogComponent::Presentation("BudgetApp"),
            &format!("Dropped '{}' event: coordinator busy", action),
        );
        return;
    };

    match flow(&mut coordinator) {
        Ok(()) => {}
        Err(e) if is_user_error(&e) => get_logger().debug(
            LogComponent::Presentation("BudgetApp"),
            &format!("'{}' rejected: {}", action, e),
        ),
        Err(e) => get_logger().error(
            LogComponent::Presentation("BudgetApp"),
            &format!("'{}' failed: {}", action, e),
        ),
    }
}

thread_local! {
    static GLOBAL_APP: RefCell<Option<BudgetApp>> = const { RefCell::new(None) };
}

/// Installs `app` as the running instance, detaching any previous one.
pub fn install_global_app(app: BudgetApp) {
    GLOBAL_APP.with(|global| {
        *global.borrow_mut() = Some(app);
    });
}

pub fn with_global_app<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&BudgetApp) -> R,
{
    GLOBAL_APP.with(|global| global.borrow().as_ref().map(f))
}
