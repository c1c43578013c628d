use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use super::format::{entry_percentage_label, format_amount, snapshot_percentage_label};
use crate::application::{BudgetView, RawInput};
use crate::config::Selectors;
use crate::domain::ledger::{BudgetSnapshot, Entry, EntryKey, EntryType};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::{AppError, AppResult};
use crate::time_utils::current_month_label;

const VALUE_ATTRIBUTE: &str = "data-value";

/// [`BudgetView`] rendering straight into the page DOM.
#[derive(Debug, Clone)]
pub struct DomBudgetView {
    selectors: Selectors,
}

impl DomBudgetView {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    fn query(&self, selector: &str) -> AppResult<Element> {
        document()?
            .query_selector(selector)?
            .ok_or_else(|| AppError::ElementNotFound(selector.to_string()))
    }

    fn set_text(&self, selector: &str, text: &str) -> AppResult<()> {
        self.query(selector)?.set_text_content(Some(text));
        Ok(())
    }

    fn input(&self, selector: &str) -> AppResult<HtmlInputElement> {
        self.query(selector)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| AppError::Dom(format!("{} is not an input", selector)))
    }

    fn build_entry_block(
        &self,
        document: &Document,
        entry: &Entry,
        entry_type: EntryType,
    ) -> AppResult<Element> {
        let key = entry.key(entry_type).to_string();

        let item = element(document, "div", "item clearfix")?;
        item.set_id(&key);

        let description = element(document, "div", "item__description")?;
        description.set_text_content(Some(&entry.description));
        item.append_child(&description)?;

        let right = element(document, "div", "right clearfix")?;
        let value = element(document, "div", "item__value")?;
        value.set_attribute(VALUE_ATTRIBUTE, &entry.value.to_string())?;
        value.set_text_content(Some(&format_amount(entry.value)));
        right.append_child(&value)?;

        if entry_type == EntryType::Expense {
            let percentage = element(document, "div", "item__percentage")?;
            percentage.set_text_content(Some("0%"));
            right.append_child(&percentage)?;
        }

        let delete = element(document, "div", "item__delete")?;
        let button = element(document, "button", "item__delete--btn")?;
        let icon = element(document, "i", "ion-ios-close-outline")?;
        icon.set_attribute(&self.selectors.entry_key_attribute, &key)?;
        button.append_child(&icon)?;
        delete.append_child(&button)?;
        right.append_child(&delete)?;

        item.append_child(&right)?;
        Ok(item)
    }
}

impl Default for DomBudgetView {
    fn default() -> Self {
        Self::new(Selectors::default())
    }
}

impl BudgetView for DomBudgetView {
    fn read_input(&self) -> AppResult<RawInput> {
        let type_element = self.query(&self.selectors.input_type)?;
        Ok(RawInput {
            entry_type: field_value(&type_element),
            description: self.input(&self.selectors.input_description)?.value(),
            raw_value: js_sys::parse_float(&self.input(&self.selectors.input_value)?.value()),
        })
    }

    fn render_entry(&self, entry: &Entry, entry_type: EntryType) -> AppResult<()> {
        let document = document()?;
        let list = self.query(self.selectors.list_for(entry_type))?;
        let block = self.build_entry_block(&document, entry, entry_type)?;
        list.append_child(&block)?;
        Ok(())
    }

    fn render_aggregates(&self, snapshot: &BudgetSnapshot) -> AppResult<()> {
        self.set_text(&self.selectors.budget_label, &format_amount(snapshot.budget))?;
        self.set_text(&self.selectors.income_label, &format_amount(snapshot.income_total))?;
        self.set_text(&self.selectors.expenses_label, &format_amount(snapshot.expense_total))?;
        self.set_text(&self.selectors.percentage_label, &snapshot_percentage_label(snapshot))
    }

    fn render_percentages(&self, income_total: f64) -> AppResult<()> {
        let items = document()?.query_selector_all(&self.selectors.expense_items())?;
        for index in 0..items.length() {
            let Some(item) = items.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let value = item
                .query_selector(".item__value")?
                .and_then(|el| el.get_attribute(VALUE_ATTRIBUTE))
                .and_then(|raw| raw.parse::<f64>().ok());
            let (Some(value), Some(label)) = (value, item.query_selector(".item__percentage")?)
            else {
                continue;
            };
            label.set_text_content(Some(&entry_percentage_label(value, income_total)));
        }
        Ok(())
    }

    fn remove_entry(&self, key: &EntryKey) -> AppResult<()> {
        match document()?.get_element_by_id(&key.to_string()) {
            Some(block) => block.remove(),
            None => get_logger().debug(
                LogComponent::Infrastructure("DomBudgetView"),
                &format!("No rendered block for {}", key),
            ),
        }
        Ok(())
    }

    fn toggle_input_highlight(&self) -> AppResult<()> {
        let focus_class = &self.selectors.focus_highlight_class;
        for selector in [
            &self.selectors.input_type,
            &self.selectors.input_description,
            &self.selectors.input_value,
        ] {
            self.query(selector)?.class_list().toggle(focus_class)?;
        }
        self.query(&self.selectors.input_button)?
            .class_list()
            .toggle(&self.selectors.button_highlight_class)?;
        Ok(())
    }

    fn clear_inputs(&self) -> AppResult<()> {
        let description = self.input(&self.selectors.input_description)?;
        description.set_value("");
        self.input(&self.selectors.input_value)?.set_value("");
        description.focus()?;
        Ok(())
    }

    fn render_current_month_label(&self) -> AppResult<()> {
        self.set_text(&self.selectors.month_label, &current_month_label())
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

pub(crate) fn document() -> AppResult<Document> {
    web_sys::window()
        .ok_or_else(|| AppError::Dom("Window not available".to_string()))?
        .document()
        .ok_or_else(|| AppError::Dom("Document not available".to_string()))
}

fn element(document: &Document, tag: &str, class: &str) -> AppResult<Element> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Current value of a form control, whichever kind it is.
fn field_value(element: &Element) -> String {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        element.get_attribute("value").unwrap_or_default()
    }
}
