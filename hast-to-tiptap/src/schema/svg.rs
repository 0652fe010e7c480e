//! SVG rows.
//!
//! SVG keeps the mixed-case attribute names the format defines (`viewBox`,
//! `preserveAspectRatio`); presentation attributes are dashed.

use super::{def, Def, COMMA_SEPARATED};

pub(crate) static DEFS: &[Def] = &[
    def("accentHeight", "accent-height", 0),
    def("accumulate", "accumulate", 0),
    def("additive", "additive", 0),
    def("alignmentBaseline", "alignment-baseline", 0),
    def("amplitude", "amplitude", 0),
    def("attributeName", "attributeName", 0),
    def("attributeType", "attributeType", 0),
    def("azimuth", "azimuth", 0),
    def("baseFrequency", "baseFrequency", 0),
    def("baselineShift", "baseline-shift", 0),
    def("baseProfile", "baseProfile", 0),
    def("begin", "begin", 0),
    def("bias", "bias", 0),
    def("by", "by", 0),
    def("calcMode", "calcMode", 0),
    def("className", "class", 0),
    def("clip", "clip", 0),
    def("clipPath", "clip-path", 0),
    def("clipPathUnits", "clipPathUnits", 0),
    def("clipRule", "clip-rule", 0),
    def("color", "color", 0),
    def("colorInterpolation", "color-interpolation", 0),
    def("colorInterpolationFilters", "color-interpolation-filters", 0),
    def("cursor", "cursor", 0),
    def("cx", "cx", 0),
    def("cy", "cy", 0),
    def("d", "d", 0),
    def("diffuseConstant", "diffuseConstant", 0),
    def("direction", "direction", 0),
    def("display", "display", 0),
    def("divisor", "divisor", 0),
    def("dominantBaseline", "dominant-baseline", 0),
    def("dur", "dur", 0),
    def("dx", "dx", 0),
    def("dy", "dy", 0),
    def("edgeMode", "edgeMode", 0),
    def("elevation", "elevation", 0),
    def("end", "end", 0),
    def("exponent", "exponent", 0),
    def("fill", "fill", 0),
    def("fillOpacity", "fill-opacity", 0),
    def("fillRule", "fill-rule", 0),
    def("filter", "filter", 0),
    def("filterUnits", "filterUnits", 0),
    def("floodColor", "flood-color", 0),
    def("floodOpacity", "flood-opacity", 0),
    def("fontFamily", "font-family", 0),
    def("fontSize", "font-size", 0),
    def("fontSizeAdjust", "font-size-adjust", 0),
    def("fontStretch", "font-stretch", 0),
    def("fontStyle", "font-style", 0),
    def("fontVariant", "font-variant", 0),
    def("fontWeight", "font-weight", 0),
    def("fr", "fr", 0),
    def("from", "from", 0),
    def("fx", "fx", 0),
    def("fy", "fy", 0),
    def("g1", "g1", COMMA_SEPARATED),
    def("g2", "g2", COMMA_SEPARATED),
    def("glyphName", "glyph-name", COMMA_SEPARATED),
    def("glyphOrientationHorizontal", "glyph-orientation-horizontal", 0),
    def("glyphOrientationVertical", "glyph-orientation-vertical", 0),
    def("gradientTransform", "gradientTransform", 0),
    def("gradientUnits", "gradientUnits", 0),
    def("height", "height", 0),
    def("href", "href", 0),
    def("id", "id", 0),
    def("imageRendering", "image-rendering", 0),
    def("in", "in", 0),
    def("in2", "in2", 0),
    def("intercept", "intercept", 0),
    def("k1", "k1", 0),
    def("k2", "k2", 0),
    def("k3", "k3", 0),
    def("k4", "k4", 0),
    def("kernelMatrix", "kernelMatrix", 0),
    def("kernelUnitLength", "kernelUnitLength", 0),
    def("keyPoints", "keyPoints", 0),
    def("keySplines", "keySplines", 0),
    def("keyTimes", "keyTimes", 0),
    def("lang", "lang", 0),
    def("lengthAdjust", "lengthAdjust", 0),
    def("letterSpacing", "letter-spacing", 0),
    def("lightingColor", "lighting-color", 0),
    def("limitingConeAngle", "limitingConeAngle", 0),
    def("markerEnd", "marker-end", 0),
    def("markerHeight", "markerHeight", 0),
    def("markerMid", "marker-mid", 0),
    def("markerStart", "marker-start", 0),
    def("markerUnits", "markerUnits", 0),
    def("markerWidth", "markerWidth", 0),
    def("mask", "mask", 0),
    def("maskContentUnits", "maskContentUnits", 0),
    def("maskUnits", "maskUnits", 0),
    def("max", "max", 0),
    def("media", "media", 0),
    def("method", "method", 0),
    def("min", "min", 0),
    def("mode", "mode", 0),
    def("numOctaves", "numOctaves", 0),
    def("offset", "offset", 0),
    def("opacity", "opacity", 0),
    def("operator", "operator", 0),
    def("order", "order", 0),
    def("orient", "orient", 0),
    def("orientation", "orientation", 0),
    def("origin", "origin", 0),
    def("overflow", "overflow", 0),
    def("paintOrder", "paint-order", 0),
    def("pathLength", "pathLength", 0),
    def("patternContentUnits", "patternContentUnits", 0),
    def("patternTransform", "patternTransform", 0),
    def("patternUnits", "patternUnits", 0),
    def("pointerEvents", "pointer-events", 0),
    def("points", "points", 0),
    def("pointsAtX", "pointsAtX", 0),
    def("pointsAtY", "pointsAtY", 0),
    def("pointsAtZ", "pointsAtZ", 0),
    def("preserveAlpha", "preserveAlpha", 0),
    def("preserveAspectRatio", "preserveAspectRatio", 0),
    def("primitiveUnits", "primitiveUnits", 0),
    def("r", "r", 0),
    def("radius", "radius", 0),
    def("refX", "refX", 0),
    def("refY", "refY", 0),
    def("repeatCount", "repeatCount", 0),
    def("repeatDur", "repeatDur", 0),
    def("requiredExtensions", "requiredExtensions", 0),
    def("requiredFeatures", "requiredFeatures", 0),
    def("restart", "restart", 0),
    def("result", "result", 0),
    def("rotate", "rotate", 0),
    def("rx", "rx", 0),
    def("ry", "ry", 0),
    def("scale", "scale", 0),
    def("seed", "seed", 0),
    def("shapeRendering", "shape-rendering", 0),
    def("slope", "slope", 0),
    def("spacing", "spacing", 0),
    def("specularConstant", "specularConstant", 0),
    def("specularExponent", "specularExponent", 0),
    def("speed", "speed", 0),
    def("spreadMethod", "spreadMethod", 0),
    def("startOffset", "startOffset", 0),
    def("stdDeviation", "stdDeviation", 0),
    def("stitchTiles", "stitchTiles", 0),
    def("stopColor", "stop-color", 0),
    def("stopOpacity", "stop-opacity", 0),
    def("stroke", "stroke", 0),
    def("strokeDashArray", "stroke-dasharray", COMMA_SEPARATED),
    def("strokeDashOffset", "stroke-dashoffset", 0),
    def("strokeLineCap", "stroke-linecap", 0),
    def("strokeLineJoin", "stroke-linejoin", 0),
    def("strokeMiterLimit", "stroke-miterlimit", 0),
    def("strokeOpacity", "stroke-opacity", 0),
    def("strokeWidth", "stroke-width", 0),
    def("style", "style", 0),
    def("surfaceScale", "surfaceScale", 0),
    def("systemLanguage", "systemLanguage", COMMA_SEPARATED),
    def("tabIndex", "tabindex", 0),
    def("tableValues", "tableValues", 0),
    def("target", "target", 0),
    def("targetX", "targetX", 0),
    def("targetY", "targetY", 0),
    def("textAnchor", "text-anchor", 0),
    def("textDecoration", "text-decoration", 0),
    def("textLength", "textLength", 0),
    def("textRendering", "text-rendering", 0),
    def("to", "to", 0),
    def("transform", "transform", 0),
    def("transformOrigin", "transform-origin", 0),
    def("type", "type", 0),
    def("unicodeBidi", "unicode-bidi", 0),
    def("values", "values", 0),
    def("vectorEffect", "vector-effect", 0),
    def("version", "version", 0),
    def("viewBox", "viewBox", 0),
    def("viewTarget", "viewTarget", 0),
    def("visibility", "visibility", 0),
    def("width", "width", 0),
    def("wordSpacing", "word-spacing", 0),
    def("writingMode", "writing-mode", 0),
    def("x", "x", 0),
    def("x1", "x1", 0),
    def("x2", "x2", 0),
    def("xChannelSelector", "xChannelSelector", 0),
    def("y", "y", 0),
    def("y1", "y1", 0),
    def("y2", "y2", 0),
    def("yChannelSelector", "yChannelSelector", 0),
    def("z", "z", 0),
    def("zoomAndPan", "zoomAndPan", 0),
];
