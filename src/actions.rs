use crate::{
    component::{date_picker::DatePickerAction, input::TextInputAction},
    page::form::FormAction,
};

#[derive(Clone, Debug)]
pub(crate) enum Action {
    Tick,
    Render,
    Quit,
    SwitchInputMode(bool),

    Form(FormAction),

    /// An action addressed to the component with the given id
    Comp((CompAction, u64)),
}

#[derive(Clone, Debug)]
pub(crate) enum CompAction {
    Input(TextInputAction),
    DatePicker(DatePickerAction),
}
