//! aria rows, shared by the HTML and SVG schema sets.

use super::{def, Def, BOOLEANISH};

pub(crate) static DEFS: &[Def] = &[
    def("ariaActiveDescendant", "aria-activedescendant", 0),
    def("ariaAtomic", "aria-atomic", BOOLEANISH),
    def("ariaAutoComplete", "aria-autocomplete", 0),
    def("ariaBusy", "aria-busy", BOOLEANISH),
    def("ariaChecked", "aria-checked", BOOLEANISH),
    def("ariaColCount", "aria-colcount", 0),
    def("ariaColIndex", "aria-colindex", 0),
    def("ariaColSpan", "aria-colspan", 0),
    def("ariaControls", "aria-controls", 0),
    def("ariaCurrent", "aria-current", 0),
    def("ariaDescribedBy", "aria-describedby", 0),
    def("ariaDetails", "aria-details", 0),
    def("ariaDisabled", "aria-disabled", BOOLEANISH),
    def("ariaDropEffect", "aria-dropeffect", 0),
    def("ariaErrorMessage", "aria-errormessage", 0),
    def("ariaExpanded", "aria-expanded", BOOLEANISH),
    def("ariaFlowTo", "aria-flowto", 0),
    def("ariaGrabbed", "aria-grabbed", BOOLEANISH),
    def("ariaHasPopup", "aria-haspopup", 0),
    def("ariaHidden", "aria-hidden", BOOLEANISH),
    def("ariaInvalid", "aria-invalid", 0),
    def("ariaKeyShortcuts", "aria-keyshortcuts", 0),
    def("ariaLabel", "aria-label", 0),
    def("ariaLabelledBy", "aria-labelledby", 0),
    def("ariaLevel", "aria-level", 0),
    def("ariaLive", "aria-live", 0),
    def("ariaModal", "aria-modal", BOOLEANISH),
    def("ariaMultiLine", "aria-multiline", BOOLEANISH),
    def("ariaMultiSelectable", "aria-multiselectable", BOOLEANISH),
    def("ariaOrientation", "aria-orientation", 0),
    def("ariaOwns", "aria-owns", 0),
    def("ariaPlaceholder", "aria-placeholder", 0),
    def("ariaPosInSet", "aria-posinset", 0),
    def("ariaPressed", "aria-pressed", BOOLEANISH),
    def("ariaReadOnly", "aria-readonly", BOOLEANISH),
    def("ariaRelevant", "aria-relevant", 0),
    def("ariaRequired", "aria-required", BOOLEANISH),
    def("ariaRoleDescription", "aria-roledescription", 0),
    def("ariaRowCount", "aria-rowcount", 0),
    def("ariaRowIndex", "aria-rowindex", 0),
    def("ariaRowSpan", "aria-rowspan", 0),
    def("ariaSelected", "aria-selected", BOOLEANISH),
    def("ariaSetSize", "aria-setsize", 0),
    def("ariaSort", "aria-sort", 0),
    def("ariaValueMax", "aria-valuemax", 0),
    def("ariaValueMin", "aria-valuemin", 0),
    def("ariaValueNow", "aria-valuenow", 0),
    def("ariaValueText", "aria-valuetext", 0),
    def("role", "role", 0),
];
