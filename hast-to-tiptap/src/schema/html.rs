//! HTML rows.
//!
//! The four `MUST_USE_PROPERTY` rows (`checked`, `multiple`, `muted`,
//! `selected`) are the legacy object-model set; all four are also
//! presence-only booleans, which is what actually decides their rendering.

use super::{def, Def, BOOLEAN, BOOLEANISH, COMMA_SEPARATED, MUST_USE_PROPERTY, OVERLOADED_BOOLEAN};

pub(crate) static DEFS: &[Def] = &[
    def("abbr", "abbr", 0),
    def("accept", "accept", COMMA_SEPARATED),
    def("acceptCharset", "accept-charset", 0),
    def("accessKey", "accesskey", 0),
    def("action", "action", 0),
    def("allow", "allow", 0),
    def("allowFullScreen", "allowfullscreen", BOOLEAN),
    def("allowPaymentRequest", "allowpaymentrequest", BOOLEAN),
    def("allowUserMedia", "allowusermedia", BOOLEAN),
    def("alt", "alt", 0),
    def("as", "as", 0),
    def("async", "async", BOOLEAN),
    def("autoCapitalize", "autocapitalize", 0),
    def("autoComplete", "autocomplete", 0),
    def("autoFocus", "autofocus", BOOLEAN),
    def("autoPlay", "autoplay", BOOLEAN),
    def("capture", "capture", BOOLEAN),
    def("charSet", "charset", 0),
    def("checked", "checked", BOOLEAN | MUST_USE_PROPERTY),
    def("cite", "cite", 0),
    def("className", "class", 0),
    def("cols", "cols", 0),
    def("colSpan", "colspan", 0),
    def("content", "content", 0),
    def("contentEditable", "contenteditable", BOOLEANISH),
    def("controls", "controls", BOOLEAN),
    def("controlsList", "controlslist", 0),
    def("coords", "coords", COMMA_SEPARATED),
    def("crossOrigin", "crossorigin", 0),
    def("data", "data", 0),
    def("dateTime", "datetime", 0),
    def("decoding", "decoding", 0),
    def("default", "default", BOOLEAN),
    def("defer", "defer", BOOLEAN),
    def("dir", "dir", 0),
    def("dirName", "dirname", 0),
    def("disabled", "disabled", BOOLEAN),
    def("download", "download", OVERLOADED_BOOLEAN),
    def("draggable", "draggable", BOOLEANISH),
    def("encType", "enctype", 0),
    def("enterKeyHint", "enterkeyhint", 0),
    def("form", "form", 0),
    def("formAction", "formaction", 0),
    def("formEncType", "formenctype", 0),
    def("formMethod", "formmethod", 0),
    def("formNoValidate", "formnovalidate", BOOLEAN),
    def("formTarget", "formtarget", 0),
    def("headers", "headers", 0),
    def("height", "height", 0),
    def("hidden", "hidden", BOOLEAN),
    def("high", "high", 0),
    def("href", "href", 0),
    def("hrefLang", "hreflang", 0),
    def("htmlFor", "for", 0),
    def("httpEquiv", "http-equiv", 0),
    def("id", "id", 0),
    def("imageSizes", "imagesizes", 0),
    def("imageSrcSet", "imagesrcset", COMMA_SEPARATED),
    def("inert", "inert", BOOLEAN),
    def("inputMode", "inputmode", 0),
    def("integrity", "integrity", 0),
    def("is", "is", 0),
    def("isMap", "ismap", BOOLEAN),
    def("itemId", "itemid", 0),
    def("itemProp", "itemprop", 0),
    def("itemRef", "itemref", 0),
    def("itemScope", "itemscope", BOOLEAN),
    def("itemType", "itemtype", 0),
    def("kind", "kind", 0),
    def("label", "label", 0),
    def("lang", "lang", 0),
    def("language", "language", 0),
    def("list", "list", 0),
    def("loading", "loading", 0),
    def("loop", "loop", BOOLEAN),
    def("low", "low", 0),
    def("max", "max", 0),
    def("maxLength", "maxlength", 0),
    def("media", "media", 0),
    def("method", "method", 0),
    def("min", "min", 0),
    def("minLength", "minlength", 0),
    def("multiple", "multiple", BOOLEAN | MUST_USE_PROPERTY),
    def("muted", "muted", BOOLEAN | MUST_USE_PROPERTY),
    def("name", "name", 0),
    def("nonce", "nonce", 0),
    def("noModule", "nomodule", BOOLEAN),
    def("noValidate", "novalidate", BOOLEAN),
    def("open", "open", BOOLEAN),
    def("optimum", "optimum", 0),
    def("pattern", "pattern", 0),
    def("ping", "ping", 0),
    def("placeholder", "placeholder", 0),
    def("playsInline", "playsinline", BOOLEAN),
    def("poster", "poster", 0),
    def("preload", "preload", 0),
    def("readOnly", "readonly", BOOLEAN),
    def("referrerPolicy", "referrerpolicy", 0),
    def("rel", "rel", 0),
    def("required", "required", BOOLEAN),
    def("reversed", "reversed", BOOLEAN),
    def("rows", "rows", 0),
    def("rowSpan", "rowspan", 0),
    def("sandbox", "sandbox", 0),
    def("scope", "scope", 0),
    def("seamless", "seamless", BOOLEAN),
    def("selected", "selected", BOOLEAN | MUST_USE_PROPERTY),
    def("shape", "shape", 0),
    def("size", "size", 0),
    def("sizes", "sizes", 0),
    def("slot", "slot", 0),
    def("span", "span", 0),
    def("spellCheck", "spellcheck", BOOLEANISH),
    def("src", "src", 0),
    def("srcDoc", "srcdoc", 0),
    def("srcLang", "srclang", 0),
    def("srcSet", "srcset", COMMA_SEPARATED),
    def("start", "start", 0),
    def("step", "step", 0),
    def("style", "style", 0),
    def("tabIndex", "tabindex", 0),
    def("target", "target", 0),
    def("title", "title", 0),
    def("translate", "translate", 0),
    def("type", "type", 0),
    def("typeMustMatch", "typemustmatch", BOOLEAN),
    def("useMap", "usemap", 0),
    def("value", "value", 0),
    def("width", "width", 0),
    def("wrap", "wrap", 0),
];
