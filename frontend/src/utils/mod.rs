pub mod dom;

pub use dom::{
    apply_edit, class_set, document, element_by_id, html_element, listen, query_all, DomError,
    JsResultExt,
};
