// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact type table, indexed by wire id magnitude minus one.

use super::{t, KnownDefault, KnownType};
use crate::assembly::AssemblyId;
use crate::config::TYPE_ID_MAX;

const BASE: AssemblyId = AssemblyId::Base;
const CORE: AssemblyId = AssemblyId::Core;
const FRAMEWORK: AssemblyId = AssemblyId::Framework;
const SYSTEM: AssemblyId = AssemblyId::System;
const RUNTIME: AssemblyId = AssemblyId::Runtime;

const NS_SYSTEM: &str = "System";
const NS_SYSTEM_COLLECTIONS: &str = "System.Collections";
const NS_SYSTEM_COMPONENTMODEL: &str = "System.ComponentModel";
const NS_SYSTEM_GLOBALIZATION: &str = "System.Globalization";
const NS_SYSTEM_INPUT: &str = "System.Input";
const NS_SYSTEM_XML: &str = "System.Xml";
const NS_UI: &str = "Ui";
const NS_UI_CONTROLS: &str = "Ui.Controls";
const NS_UI_CONTROLS_PRIMITIVES: &str = "Ui.Controls.Primitives";
const NS_UI_DATA: &str = "Ui.Data";
const NS_UI_DOCUMENTS: &str = "Ui.Documents";
const NS_UI_INK: &str = "Ui.Ink";
const NS_UI_INPUT: &str = "Ui.Input";
const NS_UI_MARKUP: &str = "Ui.Markup";
const NS_UI_MEDIA: &str = "Ui.Media";
const NS_UI_MEDIA_ANIMATION: &str = "Ui.Media.Animation";
const NS_UI_MEDIA_EFFECTS: &str = "Ui.Media.Effects";
const NS_UI_MEDIA_IMAGING: &str = "Ui.Media.Imaging";
const NS_UI_MEDIA_MEDIA3D: &str = "Ui.Media.Media3D";
const NS_UI_NAVIGATION: &str = "Ui.Navigation";
const NS_UI_SHAPES: &str = "Ui.Shapes";

#[rustfmt::skip]
pub(crate) static KNOWN_TYPES: [KnownType; TYPE_ID_MAX as usize] = [
    /*   1 */ t("AccessText", NS_UI_CONTROLS, FRAMEWORK, 238).content("Text"),
    /*   2 */ t("AdornedElementPlaceholder", NS_UI_CONTROLS, FRAMEWORK, 238),
    /*   3 */ t("Adorner", NS_UI_DOCUMENTS, FRAMEWORK, 238).abstract_type(),
    /*   4 */ t("AdornerDecorator", NS_UI_CONTROLS, FRAMEWORK, 134).content("Child"),
    /*   5 */ t("AdornerLayer", NS_UI_DOCUMENTS, FRAMEWORK, 238),
    /*   6 */ t("AlignmentX", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /*   7 */ t("AlignmentY", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /*   8 */ t("AlternationConverter", NS_UI_CONTROLS, FRAMEWORK, 415),
    /*   9 */ t("AmbientLight", NS_UI_MEDIA_MEDIA3D, CORE, 345),
    /*  10 */ t("AnchoredBlock", NS_UI_DOCUMENTS, FRAMEWORK, 300).abstract_type().content("Blocks"),
    /*  11 */ t("Animatable", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /*  12 */ t("AnimationClock", NS_UI_MEDIA_ANIMATION, CORE, 77),
    /*  13 */ t("AnimationTimeline", NS_UI_MEDIA_ANIMATION, CORE, 654).abstract_type(),
    /*  14 */ t("Application", NS_UI, FRAMEWORK, 160),
    /*  15 */ t("ArcSegment", NS_UI_MEDIA, CORE, 439),
    /*  16 */ t("Array", NS_SYSTEM, RUNTIME, 415).abstract_type().sequence(),
    /*  17 */ t("ArrayExtension", NS_UI_MARKUP, FRAMEWORK, 372).content("Items").constructors(&[&[683]]),
    /*  18 */ t("Attribute", NS_SYSTEM, RUNTIME, 415).abstract_type(),
    /*  19 */ t("AxisAngleRotation3D", NS_UI_MEDIA_MEDIA3D, CORE, 520),
    /*  20 */ t("BackEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /*  21 */ t("BaselineAlignment", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /*  22 */ t("BeginStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 679).content("Storyboard"),
    /*  23 */ t("BevelBitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 34),
    /*  24 */ t("BezierSegment", NS_UI_MEDIA, CORE, 439),
    /*  25 */ t("Binding", NS_UI_DATA, FRAMEWORK, 26).constructors(&[&[593]]),
    /*  26 */ t("BindingBase", NS_UI_DATA, FRAMEWORK, 372).abstract_type(),
    /*  27 */ t("BindingExpression", NS_UI_DATA, FRAMEWORK, 28).no_default_constructor().converter(210),
    /*  28 */ t("BindingExpressionBase", NS_UI_DATA, FRAMEWORK, 209).abstract_type().converter(210),
    /*  29 */ t("BindingGroup", NS_UI_DATA, FRAMEWORK, 137),
    /*  30 */ t("BindingListCollectionView", NS_UI_DATA, FRAMEWORK, 81),
    /*  31 */ t("BindingMode", NS_UI_DATA, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /*  32 */ t("BitmapCache", NS_UI_MEDIA, CORE, 66).converter(67),
    /*  33 */ t("BitmapCacheBrush", NS_UI_MEDIA, CORE, 59).converter(60),
    /*  34 */ t("BitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 11).abstract_type(),
    /*  35 */ t("BitmapEffectCollection", NS_UI_MEDIA_EFFECTS, CORE, 11).sequence(),
    /*  36 */ t("BitmapEffectGroup", NS_UI_MEDIA_EFFECTS, CORE, 34).content("Children"),
    /*  37 */ t("BitmapEffectInput", NS_UI_MEDIA_EFFECTS, CORE, 11),
    /*  38 */ t("BitmapFrame", NS_UI_MEDIA_IMAGING, CORE, 42).abstract_type().converter(297),
    /*  39 */ t("BitmapImage", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /*  40 */ t("BitmapPalette", NS_UI_MEDIA_IMAGING, CORE, 415),
    /*  41 */ t("BitmapScalingMode", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /*  42 */ t("BitmapSource", NS_UI_MEDIA_IMAGING, CORE, 296).abstract_type().converter(297),
    /*  43 */ t("Block", NS_UI_DOCUMENTS, FRAMEWORK, 635).abstract_type(),
    /*  44 */ t("BlockCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /*  45 */ t("BlockUIContainer", NS_UI_DOCUMENTS, FRAMEWORK, 43).content("Child"),
    /*  46 */ t("BlurBitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 34),
    /*  47 */ t("BlurEffect", NS_UI_MEDIA_EFFECTS, CORE, 193),
    /*  48 */ t("Bold", NS_UI_DOCUMENTS, FRAMEWORK, 569).content("Inlines"),
    /*  49 */ t("Boolean", NS_SYSTEM, RUNTIME, 415).converter(52).default_value(KnownDefault::False),
    /*  50 */ t("BooleanAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /*  51 */ t("BooleanAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 50).content("KeyFrames"),
    /*  52 */ t("BooleanConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /*  53 */ t("BooleanKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /*  54 */ t("BooleanKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /*  55 */ t("BooleanToVisibilityConverter", NS_UI_CONTROLS, FRAMEWORK, 415),
    /*  56 */ t("Border", NS_UI_CONTROLS, FRAMEWORK, 134).content("Child"),
    /*  57 */ t("BorderGapMaskConverter", NS_UI_CONTROLS, FRAMEWORK, 415),
    /*  58 */ t("BounceEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /*  59 */ t("Brush", NS_UI_MEDIA, CORE, 11).abstract_type().converter(60),
    /*  60 */ t("BrushConverter", NS_UI_MEDIA, CORE, 684),
    /*  61 */ t("BrushMappingMode", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /*  62 */ t("BulletDecorator", NS_UI_CONTROLS, FRAMEWORK, 134).content("Child"),
    /*  63 */ t("Button", NS_UI_CONTROLS, FRAMEWORK, 64).content("Content"),
    /*  64 */ t("ButtonBase", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 107).abstract_type().content("Content"),
    /*  65 */ t("Byte", NS_SYSTEM, RUNTIME, 415).default_value(KnownDefault::Zero),
    /*  66 */ t("CacheMode", NS_UI_MEDIA, CORE, 11).abstract_type().converter(67),
    /*  67 */ t("CacheModeConverter", NS_UI_MEDIA, CORE, 684),
    /*  68 */ t("CachedBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /*  69 */ t("Calendar", NS_UI_CONTROLS, FRAMEWORK, 113),
    /*  70 */ t("Camera", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /*  71 */ t("Canvas", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /*  72 */ t("Char", NS_SYSTEM, RUNTIME, 415).default_value(KnownDefault::Zero),
    /*  73 */ t("CharacterCasing", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /*  74 */ t("CheckBox", NS_UI_CONTROLS, FRAMEWORK, 658).content("Content"),
    /*  75 */ t("CircleEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /*  76 */ t("ClickMode", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /*  77 */ t("Clock", NS_UI_MEDIA_ANIMATION, CORE, 160).abstract_type(),
    /*  78 */ t("ClockGroup", NS_UI_MEDIA_ANIMATION, CORE, 77),
    /*  79 */ t("ClockState", NS_UI_MEDIA_ANIMATION, CORE, 199).default_value(KnownDefault::Zero),
    /*  80 */ t("CollectionContainer", NS_UI_DATA, FRAMEWORK, 137),
    /*  81 */ t("CollectionView", NS_UI_DATA, FRAMEWORK, 160),
    /*  82 */ t("CollectionViewSource", NS_UI_DATA, FRAMEWORK, 137),
    /*  83 */ t("Color", NS_UI_MEDIA, CORE, 705).converter(89),
    /*  84 */ t("ColorAnimation", NS_UI_MEDIA_ANIMATION, CORE, 85),
    /*  85 */ t("ColorAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /*  86 */ t("ColorAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 85).content("KeyFrames"),
    /*  87 */ t("ColorConvertedBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /*  88 */ t("ColorConvertedBitmapExtension", NS_UI, FRAMEWORK, 372),
    /*  89 */ t("ColorConverter", NS_UI_MEDIA, CORE, 684),
    /*  90 */ t("ColorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /*  91 */ t("ColorKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /*  92 */ t("ColumnDefinition", NS_UI_CONTROLS, FRAMEWORK, 135),
    /*  93 */ t("ColumnDefinitionCollection", NS_UI_CONTROLS, FRAMEWORK, 415).sequence(),
    /*  94 */ t("CombinedGeometry", NS_UI_MEDIA, CORE, 244).converter(247),
    /*  95 */ t("ComboBox", NS_UI_CONTROLS, FRAMEWORK, 544).content("Items"),
    /*  96 */ t("ComboBoxItem", NS_UI_CONTROLS, FRAMEWORK, 365).content("Content"),
    /*  97 */ t("CommandBinding", NS_UI_INPUT, CORE, 415),
    /*  98 */ t("CommandBindingCollection", NS_UI_INPUT, CORE, 415).sequence(),
    /*  99 */ t("CommandConverter", NS_UI_INPUT, CORE, 684),
    /* 100 */ t("ComponentResourceKey", NS_UI, FRAMEWORK, 514).converter(101).constructors(&[&[683, 415]]),
    /* 101 */ t("ComponentResourceKeyConverter", NS_UI, FRAMEWORK, 684),
    /* 102 */ t("CompositeCollection", NS_UI_DATA, FRAMEWORK, 415).sequence(),
    /* 103 */ t("Condition", NS_UI, FRAMEWORK, 415),
    /* 104 */ t("ConditionCollection", NS_UI, FRAMEWORK, 415).sequence(),
    /* 105 */ t("ContainerUIElement3D", NS_UI_MEDIA_MEDIA3D, CORE, 690),
    /* 106 */ t("ContainerVisual", NS_UI_MEDIA, CORE, 735),
    /* 107 */ t("ContentControl", NS_UI_CONTROLS, FRAMEWORK, 113).content("Content"),
    /* 108 */ t("ContentElement", NS_UI, CORE, 137),
    /* 109 */ t("ContentPresenter", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 110 */ t("ContentPropertyAttribute", NS_UI_MARKUP, BASE, 18),
    /* 111 */ t("ContextMenu", NS_UI_CONTROLS, FRAMEWORK, 389).content("Items"),
    /* 112 */ t("ContextMenuService", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 113 */ t("Control", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 114 */ t("ControlTemplate", NS_UI, FRAMEWORK, 241).content("Template").dictionary_key("TargetType").usable_before_init(),
    /* 115 */ t("ControllableStoryboardAction", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 679).abstract_type(),
    /* 116 */ t("CornerRadius", NS_UI, FRAMEWORK, 705).converter(117).constructors(&[&[167], &[167, 167, 167, 167]]),
    /* 117 */ t("CornerRadiusConverter", NS_UI, FRAMEWORK, 684),
    /* 118 */ t("CroppedBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /* 119 */ t("CubicEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 120 */ t("CultureInfo", NS_SYSTEM_GLOBALIZATION, RUNTIME, 415).no_default_constructor(),
    /* 121 */ t("Cursor", NS_UI_INPUT, CORE, 415).no_default_constructor().converter(122),
    /* 122 */ t("CursorConverter", NS_UI_INPUT, CORE, 684),
    /* 123 */ t("DashStyle", NS_UI_MEDIA, CORE, 11),
    /* 124 */ t("DataErrorValidationRule", NS_UI_DATA, FRAMEWORK, 703),
    /* 125 */ t("DataGrid", NS_UI_CONTROLS, FRAMEWORK, 544).content("Items"),
    /* 126 */ t("DataSourceProvider", NS_UI_DATA, FRAMEWORK, 415).abstract_type(),
    /* 127 */ t("DataTemplate", NS_UI, FRAMEWORK, 241).content("Template").dictionary_key("DataTemplateKey").usable_before_init(),
    /* 128 */ t("DataTemplateKey", NS_UI, FRAMEWORK, 623).converter(624).constructors(&[&[415]]),
    /* 129 */ t("DataTemplateSelector", NS_UI, FRAMEWORK, 415),
    /* 130 */ t("DataTrigger", NS_UI, FRAMEWORK, 681).content("Setters"),
    /* 131 */ t("DatePicker", NS_UI_CONTROLS, FRAMEWORK, 113),
    /* 132 */ t("DateTime", NS_SYSTEM, RUNTIME, 415),
    /* 133 */ t("Decimal", NS_SYSTEM, RUNTIME, 415).default_value(KnownDefault::ZeroFloat),
    /* 134 */ t("Decorator", NS_UI_CONTROLS, FRAMEWORK, 238).content("Child"),
    /* 135 */ t("DefinitionBase", NS_UI_CONTROLS, FRAMEWORK, 237).abstract_type(),
    /* 136 */ t("Delegate", NS_SYSTEM, RUNTIME, 415).abstract_type(),
    /* 137 */ t("DependencyObject", NS_UI, BASE, 160),
    /* 138 */ t("DependencyProperty", NS_UI, BASE, 415).no_default_constructor().converter(139),
    /* 139 */ t("DependencyPropertyConverter", NS_UI_MARKUP, FRAMEWORK, 684),
    /* 140 */ t("DependencyPropertyKey", NS_UI, BASE, 415).no_default_constructor(),
    /* 141 */ t("DialogResultConverter", NS_UI, FRAMEWORK, 684),
    /* 142 */ t("DictionaryKeyPropertyAttribute", NS_UI_MARKUP, BASE, 18),
    /* 143 */ t("DiffuseMaterial", NS_UI_MEDIA_MEDIA3D, CORE, 373),
    /* 144 */ t("DirectionalLight", NS_UI_MEDIA_MEDIA3D, CORE, 345),
    /* 145 */ t("DiscreteBooleanKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 53),
    /* 146 */ t("DiscreteColorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 90),
    /* 147 */ t("DiscreteDoubleKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 175),
    /* 148 */ t("DiscreteInt32KeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 319),
    /* 149 */ t("DiscreteMatrixKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 382),
    /* 150 */ t("DiscreteObjectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 419),
    /* 151 */ t("DiscretePoint3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 455),
    /* 152 */ t("DiscretePointKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 464),
    /* 153 */ t("DiscreteRectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 499),
    /* 154 */ t("DiscreteRotation3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 524),
    /* 155 */ t("DiscreteSizeKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 560),
    /* 156 */ t("DiscreteStringKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 597),
    /* 157 */ t("DiscreteThicknessKeyFrame", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 646),
    /* 158 */ t("DiscreteVector3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 714),
    /* 159 */ t("DiscreteVectorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 722),
    /* 160 */ t("DispatcherObject", NS_UI, BASE, 415).abstract_type(),
    /* 161 */ t("Dock", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 162 */ t("DockPanel", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 163 */ t("DocumentPageView", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 238),
    /* 164 */ t("DocumentReference", NS_UI_DOCUMENTS, FRAMEWORK, 238),
    /* 165 */ t("DocumentViewer", NS_UI_CONTROLS, FRAMEWORK, 113).content("Document"),
    /* 166 */ t("DocumentViewerBase", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 113).abstract_type(),
    /* 167 */ t("Double", NS_SYSTEM, RUNTIME, 415).converter(174).default_value(KnownDefault::ZeroFloat),
    /* 168 */ t("DoubleAnimation", NS_UI_MEDIA_ANIMATION, CORE, 169),
    /* 169 */ t("DoubleAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 170 */ t("DoubleAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 169).content("KeyFrames"),
    /* 171 */ t("DoubleAnimationUsingPath", NS_UI_MEDIA_ANIMATION, CORE, 169),
    /* 172 */ t("DoubleCollection", NS_UI_MEDIA, CORE, 11).converter(173).sequence(),
    /* 173 */ t("DoubleCollectionConverter", NS_UI_MEDIA, CORE, 684),
    /* 174 */ t("DoubleConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 175 */ t("DoubleKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 176 */ t("DoubleKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 177 */ t("Drawing", NS_UI_MEDIA, CORE, 11).abstract_type(),
    /* 178 */ t("DrawingAttributes", NS_UI_INK, CORE, 415),
    /* 179 */ t("DrawingBrush", NS_UI_MEDIA, CORE, 650).converter(60),
    /* 180 */ t("DrawingCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 181 */ t("DrawingGroup", NS_UI_MEDIA, CORE, 177).content("Children"),
    /* 182 */ t("DrawingImage", NS_UI_MEDIA, CORE, 296).converter(297),
    /* 183 */ t("DrawingVisual", NS_UI_MEDIA, CORE, 106),
    /* 184 */ t("DropShadowBitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 34),
    /* 185 */ t("DropShadowEffect", NS_UI_MEDIA_EFFECTS, CORE, 193),
    /* 186 */ t("Duration", NS_UI_MEDIA_ANIMATION, CORE, 705).converter(187).constructors(&[&[652]]),
    /* 187 */ t("DurationConverter", NS_UI_MEDIA_ANIMATION, CORE, 684),
    /* 188 */ t("DynamicResourceExtension", NS_UI, FRAMEWORK, 372).converter(189).constructors(&[&[415]]),
    /* 189 */ t("DynamicResourceExtensionConverter", NS_UI, FRAMEWORK, 684),
    /* 190 */ t("EasingFunctionBase", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 191 */ t("EasingMode", NS_UI_MEDIA_ANIMATION, CORE, 199).default_value(KnownDefault::Zero),
    /* 192 */ t("EdgeMode", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 193 */ t("Effect", NS_UI_MEDIA_EFFECTS, CORE, 11).abstract_type(),
    /* 194 */ t("ElasticEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 195 */ t("Ellipse", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 196 */ t("EllipseGeometry", NS_UI_MEDIA, CORE, 244).converter(247),
    /* 197 */ t("EmbossBitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 34),
    /* 198 */ t("EmissiveMaterial", NS_UI_MEDIA_MEDIA3D, CORE, 373),
    /* 199 */ t("Enum", NS_SYSTEM, RUNTIME, 415).abstract_type(),
    /* 200 */ t("EventHandler", NS_SYSTEM, RUNTIME, 415),
    /* 201 */ t("EventManager", NS_UI, FRAMEWORK, 415),
    /* 202 */ t("EventSetter", NS_UI, FRAMEWORK, 548),
    /* 203 */ t("EventSetterHandlerConverter", NS_UI_MARKUP, FRAMEWORK, 684),
    /* 204 */ t("EventTrigger", NS_UI, FRAMEWORK, 681).content("Actions"),
    /* 205 */ t("ExceptionValidationRule", NS_UI_DATA, FRAMEWORK, 703),
    /* 206 */ t("ExpandDirection", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 207 */ t("Expander", NS_UI_CONTROLS, FRAMEWORK, 276).content("Content"),
    /* 208 */ t("ExponentialEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 209 */ t("Expression", NS_UI, BASE, 415).abstract_type().converter(210),
    /* 210 */ t("ExpressionConverter", NS_UI, BASE, 684),
    /* 211 */ t("Figure", NS_UI_DOCUMENTS, FRAMEWORK, 10).content("Blocks"),
    /* 212 */ t("FigureLength", NS_UI_DOCUMENTS, FRAMEWORK, 705).converter(213),
    /* 213 */ t("FigureLengthConverter", NS_UI_DOCUMENTS, FRAMEWORK, 684),
    /* 214 */ t("FillBehavior", NS_UI_MEDIA_ANIMATION, CORE, 199).default_value(KnownDefault::Zero),
    /* 215 */ t("FillRule", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 216 */ t("FixedDocument", NS_UI_DOCUMENTS, FRAMEWORK, 238).content("Pages"),
    /* 217 */ t("FixedDocumentSequence", NS_UI_DOCUMENTS, FRAMEWORK, 238),
    /* 218 */ t("FixedPage", NS_UI_DOCUMENTS, FRAMEWORK, 238).content("Children"),
    /* 219 */ t("Floater", NS_UI_DOCUMENTS, FRAMEWORK, 10).content("Blocks"),
    /* 220 */ t("FlowDirection", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 221 */ t("FlowDocument", NS_UI_DOCUMENTS, FRAMEWORK, 237).content("Blocks"),
    /* 222 */ t("FlowDocumentPageViewer", NS_UI_CONTROLS, FRAMEWORK, 113),
    /* 223 */ t("FlowDocumentReader", NS_UI_CONTROLS, FRAMEWORK, 113).content("Document"),
    /* 224 */ t("FlowDocumentScrollViewer", NS_UI_CONTROLS, FRAMEWORK, 113),
    /* 225 */ t("FontFamily", NS_UI_MEDIA, CORE, 415).converter(226),
    /* 226 */ t("FontFamilyConverter", NS_UI_MEDIA, CORE, 684),
    /* 227 */ t("FontSizeConverter", NS_UI, FRAMEWORK, 684),
    /* 228 */ t("FontStretch", NS_UI, CORE, 705).converter(229),
    /* 229 */ t("FontStretchConverter", NS_UI, CORE, 684),
    /* 230 */ t("FontStyle", NS_UI, CORE, 705).converter(231),
    /* 231 */ t("FontStyleConverter", NS_UI, CORE, 684),
    /* 232 */ t("FontVariants", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 233 */ t("FontWeight", NS_UI, CORE, 705).converter(234),
    /* 234 */ t("FontWeightConverter", NS_UI, CORE, 684),
    /* 235 */ t("FormatConvertedBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /* 236 */ t("Frame", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 237 */ t("FrameworkContentElement", NS_UI, FRAMEWORK, 108),
    /* 238 */ t("FrameworkElement", NS_UI, FRAMEWORK, 689),
    /* 239 */ t("FrameworkElementFactory", NS_UI, FRAMEWORK, 415),
    /* 240 */ t("FrameworkPropertyMetadata", NS_UI, FRAMEWORK, 415),
    /* 241 */ t("FrameworkTemplate", NS_UI, FRAMEWORK, 160).abstract_type().content("Template").usable_before_init(),
    /* 242 */ t("Freezable", NS_UI, BASE, 137).abstract_type(),
    /* 243 */ t("GeneralTransform", NS_UI_MEDIA, CORE, 11).abstract_type(),
    /* 244 */ t("Geometry", NS_UI_MEDIA, CORE, 11).abstract_type().converter(247),
    /* 245 */ t("Geometry3D", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /* 246 */ t("GeometryCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 247 */ t("GeometryConverter", NS_UI_MEDIA, CORE, 684),
    /* 248 */ t("GeometryDrawing", NS_UI_MEDIA, CORE, 177),
    /* 249 */ t("GeometryGroup", NS_UI_MEDIA, CORE, 244).content("Children").converter(247),
    /* 250 */ t("GeometryModel3D", NS_UI_MEDIA_MEDIA3D, CORE, 393),
    /* 251 */ t("GlyphRun", NS_UI_MEDIA, CORE, 415).no_default_constructor(),
    /* 252 */ t("GlyphRunDrawing", NS_UI_MEDIA, CORE, 177),
    /* 253 */ t("Glyphs", NS_UI_DOCUMENTS, FRAMEWORK, 238),
    /* 254 */ t("GradientBrush", NS_UI_MEDIA, CORE, 59).abstract_type().content("GradientStops").converter(60),
    /* 255 */ t("GradientSpreadMethod", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 256 */ t("GradientStop", NS_UI_MEDIA, CORE, 11),
    /* 257 */ t("GradientStopCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 258 */ t("Grid", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 259 */ t("GridLength", NS_UI, FRAMEWORK, 705).converter(260).constructors(&[&[167], &[167, 262]]),
    /* 260 */ t("GridLengthConverter", NS_UI, FRAMEWORK, 684),
    /* 261 */ t("GridSplitter", NS_UI_CONTROLS, FRAMEWORK, 648),
    /* 262 */ t("GridUnitType", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 263 */ t("GridView", NS_UI_CONTROLS, FRAMEWORK, 726).content("Columns"),
    /* 264 */ t("GridViewColumn", NS_UI_CONTROLS, FRAMEWORK, 137),
    /* 265 */ t("GridViewColumnCollection", NS_UI_CONTROLS, FRAMEWORK, 415).sequence(),
    /* 266 */ t("GridViewColumnHeader", NS_UI_CONTROLS, FRAMEWORK, 64).content("Content"),
    /* 267 */ t("GridViewHeaderRowPresenter", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 268 */ t("GridViewRowPresenter", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 269 */ t("GroupBox", NS_UI_CONTROLS, FRAMEWORK, 276).content("Content"),
    /* 270 */ t("GroupDescription", NS_UI_DATA, FRAMEWORK, 415).abstract_type(),
    /* 271 */ t("GroupItem", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 272 */ t("GroupStyle", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 273 */ t("Guid", NS_SYSTEM, RUNTIME, 415),
    /* 274 */ t("GuidelineSet", NS_UI_MEDIA, CORE, 11),
    /* 275 */ t("HandoffBehavior", NS_UI_MEDIA_ANIMATION, CORE, 199).default_value(KnownDefault::Zero),
    /* 276 */ t("HeaderedContentControl", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 277 */ t("HeaderedItemsControl", NS_UI_CONTROLS, FRAMEWORK, 328).content("Items"),
    /* 278 */ t("HierarchicalDataTemplate", NS_UI, FRAMEWORK, 127).content("Template").dictionary_key("DataTemplateKey").usable_before_init(),
    /* 279 */ t("HorizontalAlignment", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 280 */ t("HostVisual", NS_UI_MEDIA, CORE, 106),
    /* 281 */ t("Hyperlink", NS_UI_DOCUMENTS, FRAMEWORK, 569).content("Inlines"),
    /* 282 */ t("IAddChild", NS_UI_MARKUP, CORE, 415).abstract_type(),
    /* 283 */ t("ICommand", NS_SYSTEM_INPUT, SYSTEM, 415).abstract_type(),
    /* 284 */ t("IComponentConnector", NS_UI_MARKUP, BASE, 415).abstract_type(),
    /* 285 */ t("IDictionary", NS_SYSTEM_COLLECTIONS, RUNTIME, 415).abstract_type().dictionary(),
    /* 286 */ t("IEnumerable", NS_SYSTEM_COLLECTIONS, RUNTIME, 415).abstract_type(),
    /* 287 */ t("IList", NS_SYSTEM_COLLECTIONS, RUNTIME, 415).abstract_type().sequence(),
    /* 288 */ t("IMultiValueConverter", NS_UI_DATA, FRAMEWORK, 415).abstract_type(),
    /* 289 */ t("INameScope", NS_UI_MARKUP, BASE, 415).abstract_type(),
    /* 290 */ t("INotifyPropertyChanged", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 415).abstract_type(),
    /* 291 */ t("IUriContext", NS_UI_MARKUP, BASE, 415).abstract_type(),
    /* 292 */ t("IValueConverter", NS_UI_DATA, FRAMEWORK, 415).abstract_type(),
    /* 293 */ t("Image", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 294 */ t("ImageBrush", NS_UI_MEDIA, CORE, 650).converter(60),
    /* 295 */ t("ImageDrawing", NS_UI_MEDIA, CORE, 177),
    /* 296 */ t("ImageSource", NS_UI_MEDIA, CORE, 11).abstract_type().converter(297),
    /* 297 */ t("ImageSourceConverter", NS_UI_MEDIA, CORE, 684),
    /* 298 */ t("InkCanvas", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 299 */ t("InkPresenter", NS_UI_CONTROLS, FRAMEWORK, 134).content("Child"),
    /* 300 */ t("Inline", NS_UI_DOCUMENTS, FRAMEWORK, 635).abstract_type(),
    /* 301 */ t("InlineCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 302 */ t("InlineUIContainer", NS_UI_DOCUMENTS, FRAMEWORK, 300).content("Child"),
    /* 303 */ t("InputBinding", NS_UI_INPUT, CORE, 242),
    /* 304 */ t("InputBindingCollection", NS_UI_INPUT, CORE, 415).sequence(),
    /* 305 */ t("InputGesture", NS_UI_INPUT, CORE, 415).abstract_type(),
    /* 306 */ t("InputScope", NS_UI_INPUT, CORE, 415).converter(307),
    /* 307 */ t("InputScopeConverter", NS_UI_INPUT, CORE, 684),
    /* 308 */ t("InputScopeName", NS_UI_INPUT, CORE, 415).converter(309),
    /* 309 */ t("InputScopeNameConverter", NS_UI_INPUT, CORE, 684),
    /* 310 */ t("Int16", NS_SYSTEM, RUNTIME, 415).converter(311).default_value(KnownDefault::Zero),
    /* 311 */ t("Int16Converter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 312 */ t("Int32", NS_SYSTEM, RUNTIME, 415).converter(318).default_value(KnownDefault::Zero),
    /* 313 */ t("Int32Animation", NS_UI_MEDIA_ANIMATION, CORE, 314),
    /* 314 */ t("Int32AnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 315 */ t("Int32AnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 314).content("KeyFrames"),
    /* 316 */ t("Int32Collection", NS_UI_MEDIA, CORE, 11).converter(317).sequence(),
    /* 317 */ t("Int32CollectionConverter", NS_UI_MEDIA, CORE, 684),
    /* 318 */ t("Int32Converter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 319 */ t("Int32KeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 320 */ t("Int32KeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 321 */ t("Int32Rect", NS_UI, BASE, 705).converter(322),
    /* 322 */ t("Int32RectConverter", NS_UI, BASE, 684),
    /* 323 */ t("Int64", NS_SYSTEM, RUNTIME, 415).converter(324).default_value(KnownDefault::Zero),
    /* 324 */ t("Int64Converter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 325 */ t("Italic", NS_UI_DOCUMENTS, FRAMEWORK, 569).content("Inlines"),
    /* 326 */ t("ItemCollection", NS_UI_CONTROLS, FRAMEWORK, 415).sequence(),
    /* 327 */ t("ItemContainerTemplate", NS_UI_CONTROLS, FRAMEWORK, 127).content("Template").dictionary_key("DataTemplateKey").usable_before_init(),
    /* 328 */ t("ItemsControl", NS_UI_CONTROLS, FRAMEWORK, 113).content("Items"),
    /* 329 */ t("ItemsPanelTemplate", NS_UI, FRAMEWORK, 241).content("Template").usable_before_init(),
    /* 330 */ t("ItemsPresenter", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 331 */ t("JournalEntry", NS_UI_NAVIGATION, FRAMEWORK, 137),
    /* 332 */ t("Key", NS_UI_INPUT, BASE, 199).converter(334).default_value(KnownDefault::Zero),
    /* 333 */ t("KeyBinding", NS_UI_INPUT, CORE, 303),
    /* 334 */ t("KeyConverter", NS_UI_INPUT, BASE, 684),
    /* 335 */ t("KeyGesture", NS_UI_INPUT, CORE, 305).no_default_constructor().converter(336).constructors(&[&[332], &[332, 398]]),
    /* 336 */ t("KeyGestureConverter", NS_UI_INPUT, CORE, 684),
    /* 337 */ t("KeySpline", NS_UI_MEDIA_ANIMATION, CORE, 242).converter(338),
    /* 338 */ t("KeySplineConverter", NS_UI_MEDIA_ANIMATION, CORE, 684),
    /* 339 */ t("KeyTime", NS_UI_MEDIA_ANIMATION, CORE, 705).converter(340),
    /* 340 */ t("KeyTimeConverter", NS_UI_MEDIA_ANIMATION, CORE, 684),
    /* 341 */ t("KeyboardNavigation", NS_UI_INPUT, FRAMEWORK, 415),
    /* 342 */ t("KeyboardNavigationMode", NS_UI_INPUT, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 343 */ t("Label", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 344 */ t("LengthConverter", NS_UI, FRAMEWORK, 684),
    /* 345 */ t("Light", NS_UI_MEDIA_MEDIA3D, CORE, 393).abstract_type(),
    /* 346 */ t("Line", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 347 */ t("LineBreak", NS_UI_DOCUMENTS, FRAMEWORK, 300),
    /* 348 */ t("LineGeometry", NS_UI_MEDIA, CORE, 244).converter(247),
    /* 349 */ t("LineSegment", NS_UI_MEDIA, CORE, 439),
    /* 350 */ t("LineStackingStrategy", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 351 */ t("LinearColorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 90),
    /* 352 */ t("LinearDoubleKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 175),
    /* 353 */ t("LinearGradientBrush", NS_UI_MEDIA, CORE, 254).content("GradientStops").converter(60),
    /* 354 */ t("LinearInt32KeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 319),
    /* 355 */ t("LinearPoint3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 455),
    /* 356 */ t("LinearPointKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 464),
    /* 357 */ t("LinearRectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 499),
    /* 358 */ t("LinearRotation3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 524),
    /* 359 */ t("LinearSizeKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 560),
    /* 360 */ t("LinearThicknessKeyFrame", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 646),
    /* 361 */ t("LinearVector3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 714),
    /* 362 */ t("LinearVectorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 722),
    /* 363 */ t("List", NS_UI_DOCUMENTS, FRAMEWORK, 43).content("ListItems"),
    /* 364 */ t("ListBox", NS_UI_CONTROLS, FRAMEWORK, 544).content("Items"),
    /* 365 */ t("ListBoxItem", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 366 */ t("ListCollectionView", NS_UI_DATA, FRAMEWORK, 81),
    /* 367 */ t("ListItem", NS_UI_DOCUMENTS, FRAMEWORK, 635).content("Blocks"),
    /* 368 */ t("ListItemCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 369 */ t("ListView", NS_UI_CONTROLS, FRAMEWORK, 364).content("Items"),
    /* 370 */ t("ListViewItem", NS_UI_CONTROLS, FRAMEWORK, 365).content("Content"),
    /* 371 */ t("LogicalTreeHelper", NS_UI, FRAMEWORK, 415),
    /* 372 */ t("MarkupExtension", NS_UI_MARKUP, BASE, 415).abstract_type(),
    /* 373 */ t("Material", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /* 374 */ t("MaterialCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).sequence(),
    /* 375 */ t("MaterialGroup", NS_UI_MEDIA_MEDIA3D, CORE, 373).content("Children"),
    /* 376 */ t("Matrix", NS_UI_MEDIA, BASE, 705).converter(381),
    /* 377 */ t("MatrixAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 378 */ t("MatrixAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 377).content("KeyFrames"),
    /* 379 */ t("MatrixAnimationUsingPath", NS_UI_MEDIA_ANIMATION, CORE, 377),
    /* 380 */ t("MatrixCamera", NS_UI_MEDIA_MEDIA3D, CORE, 70),
    /* 381 */ t("MatrixConverter", NS_UI_MEDIA, BASE, 684),
    /* 382 */ t("MatrixKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 383 */ t("MatrixKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 384 */ t("MatrixTransform", NS_UI_MEDIA, CORE, 666).converter(671),
    /* 385 */ t("MatrixTransform3D", NS_UI_MEDIA_MEDIA3D, CORE, 667),
    /* 386 */ t("MediaElement", NS_UI_CONTROLS, FRAMEWORK, 238),
    /* 387 */ t("MediaTimeline", NS_UI_MEDIA_ANIMATION, CORE, 654),
    /* 388 */ t("Menu", NS_UI_CONTROLS, FRAMEWORK, 389).content("Items"),
    /* 389 */ t("MenuBase", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 328).abstract_type().content("Items"),
    /* 390 */ t("MenuItem", NS_UI_CONTROLS, FRAMEWORK, 277).content("Items"),
    /* 391 */ t("MenuScrollingVisibilityConverter", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 392 */ t("MeshGeometry3D", NS_UI_MEDIA_MEDIA3D, CORE, 245),
    /* 393 */ t("Model3D", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /* 394 */ t("Model3DCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).sequence(),
    /* 395 */ t("Model3DGroup", NS_UI_MEDIA_MEDIA3D, CORE, 393).content("Children"),
    /* 396 */ t("ModelUIElement3D", NS_UI_MEDIA_MEDIA3D, CORE, 690),
    /* 397 */ t("ModelVisual3D", NS_UI_MEDIA_MEDIA3D, CORE, 736).content("Children"),
    /* 398 */ t("ModifierKeys", NS_UI_INPUT, BASE, 199).converter(399).default_value(KnownDefault::Zero),
    /* 399 */ t("ModifierKeysConverter", NS_UI_INPUT, BASE, 684),
    /* 400 */ t("MouseAction", NS_UI_INPUT, CORE, 199).converter(401).default_value(KnownDefault::Zero),
    /* 401 */ t("MouseActionConverter", NS_UI_INPUT, CORE, 684),
    /* 402 */ t("MouseBinding", NS_UI_INPUT, CORE, 303),
    /* 403 */ t("MouseGesture", NS_UI_INPUT, CORE, 305).converter(404),
    /* 404 */ t("MouseGestureConverter", NS_UI_INPUT, CORE, 684),
    /* 405 */ t("MultiBinding", NS_UI_DATA, FRAMEWORK, 26).content("Bindings"),
    /* 406 */ t("MultiBindingExpression", NS_UI_DATA, FRAMEWORK, 28).no_default_constructor().converter(210),
    /* 407 */ t("MultiDataTrigger", NS_UI, FRAMEWORK, 681).content("Setters"),
    /* 408 */ t("MultiTrigger", NS_UI, FRAMEWORK, 681).content("Setters"),
    /* 409 */ t("NameScope", NS_UI, BASE, 415),
    /* 410 */ t("NavigationService", NS_UI_NAVIGATION, FRAMEWORK, 415),
    /* 411 */ t("NavigationWindow", NS_UI_CONTROLS, FRAMEWORK, 744).content("Content"),
    /* 412 */ t("NotifyDataErrorValidationRule", NS_UI_DATA, FRAMEWORK, 703),
    /* 413 */ t("NullExtension", NS_UI_MARKUP, FRAMEWORK, 372),
    /* 414 */ t("Nullable", NS_SYSTEM, RUNTIME, 415),
    /* 415 */ t("Object", NS_SYSTEM, RUNTIME, 0),
    /* 416 */ t("ObjectAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 417 */ t("ObjectAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 416).content("KeyFrames"),
    /* 418 */ t("ObjectDataProvider", NS_UI_DATA, FRAMEWORK, 126),
    /* 419 */ t("ObjectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 420 */ t("ObjectKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 421 */ t("ObservableCollection", NS_UI_DATA, FRAMEWORK, 415).sequence(),
    /* 422 */ t("Orientation", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 423 */ t("OrthographicCamera", NS_UI_MEDIA_MEDIA3D, CORE, 479),
    /* 424 */ t("OuterGlowBitmapEffect", NS_UI_MEDIA_EFFECTS, CORE, 34),
    /* 425 */ t("OverflowMode", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 426 */ t("Page", NS_UI_CONTROLS, FRAMEWORK, 238).content("Content"),
    /* 427 */ t("PageContent", NS_UI_DOCUMENTS, FRAMEWORK, 238).content("Child"),
    /* 428 */ t("PageContentCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 429 */ t("PageFunctionBase", NS_UI_NAVIGATION, FRAMEWORK, 426).abstract_type().content("Content"),
    /* 430 */ t("Panel", NS_UI_CONTROLS, FRAMEWORK, 238).abstract_type().content("Children"),
    /* 431 */ t("Paragraph", NS_UI_DOCUMENTS, FRAMEWORK, 43).content("Inlines"),
    /* 432 */ t("ParallelTimeline", NS_UI_MEDIA_ANIMATION, CORE, 657).content("Children"),
    /* 433 */ t("PasswordBox", NS_UI_CONTROLS, FRAMEWORK, 113),
    /* 434 */ t("Path", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 435 */ t("PathFigure", NS_UI_MEDIA, CORE, 11).content("Segments"),
    /* 436 */ t("PathFigureCollection", NS_UI_MEDIA, CORE, 11).converter(437).sequence(),
    /* 437 */ t("PathFigureCollectionConverter", NS_UI_MEDIA, CORE, 684),
    /* 438 */ t("PathGeometry", NS_UI_MEDIA, CORE, 244).content("Figures").converter(247),
    /* 439 */ t("PathSegment", NS_UI_MEDIA, CORE, 11).abstract_type(),
    /* 440 */ t("PathSegmentCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 441 */ t("PauseStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 442 */ t("Pen", NS_UI_MEDIA, CORE, 11),
    /* 443 */ t("PenLineCap", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 444 */ t("PenLineJoin", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 445 */ t("PerspectiveCamera", NS_UI_MEDIA_MEDIA3D, CORE, 479),
    /* 446 */ t("PlacementMode", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 447 */ t("Point", NS_UI, BASE, 705).converter(463).constructors(&[&[167, 167]]),
    /* 448 */ t("Point3D", NS_UI_MEDIA_MEDIA3D, CORE, 705).converter(454).constructors(&[&[167, 167, 167]]),
    /* 449 */ t("Point3DAnimation", NS_UI_MEDIA_ANIMATION, CORE, 450),
    /* 450 */ t("Point3DAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 451 */ t("Point3DAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 450).content("KeyFrames"),
    /* 452 */ t("Point3DCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).converter(453).sequence(),
    /* 453 */ t("Point3DCollectionConverter", NS_UI_MEDIA_MEDIA3D, CORE, 684),
    /* 454 */ t("Point3DConverter", NS_UI_MEDIA_MEDIA3D, CORE, 684),
    /* 455 */ t("Point3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 456 */ t("Point3DKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 457 */ t("PointAnimation", NS_UI_MEDIA_ANIMATION, CORE, 458),
    /* 458 */ t("PointAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 459 */ t("PointAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 458).content("KeyFrames"),
    /* 460 */ t("PointAnimationUsingPath", NS_UI_MEDIA_ANIMATION, CORE, 458),
    /* 461 */ t("PointCollection", NS_UI_MEDIA, CORE, 11).converter(462).sequence(),
    /* 462 */ t("PointCollectionConverter", NS_UI_MEDIA, CORE, 684),
    /* 463 */ t("PointConverter", NS_UI, BASE, 684),
    /* 464 */ t("PointKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 465 */ t("PointKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 466 */ t("PointLight", NS_UI_MEDIA_MEDIA3D, CORE, 467),
    /* 467 */ t("PointLightBase", NS_UI_MEDIA_MEDIA3D, CORE, 345).abstract_type(),
    /* 468 */ t("PolyBezierSegment", NS_UI_MEDIA, CORE, 439),
    /* 469 */ t("PolyLineSegment", NS_UI_MEDIA, CORE, 439),
    /* 470 */ t("PolyQuadraticBezierSegment", NS_UI_MEDIA, CORE, 439),
    /* 471 */ t("Polygon", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 472 */ t("Polyline", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 473 */ t("Popup", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 238).content("Child"),
    /* 474 */ t("PowerEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 475 */ t("PresentationSource", NS_UI, CORE, 160).abstract_type(),
    /* 476 */ t("PriorityBinding", NS_UI_DATA, FRAMEWORK, 26).content("Bindings"),
    /* 477 */ t("PriorityBindingExpression", NS_UI_DATA, FRAMEWORK, 28).no_default_constructor().converter(210),
    /* 478 */ t("ProgressBar", NS_UI_CONTROLS, FRAMEWORK, 493),
    /* 479 */ t("ProjectionCamera", NS_UI_MEDIA_MEDIA3D, CORE, 70).abstract_type(),
    /* 480 */ t("PropertyGroupDescription", NS_UI_DATA, FRAMEWORK, 270),
    /* 481 */ t("PropertyMetadata", NS_UI, FRAMEWORK, 415),
    /* 482 */ t("PropertyPath", NS_UI, FRAMEWORK, 415).no_default_constructor().converter(483).constructors(&[&[415]]),
    /* 483 */ t("PropertyPathConverter", NS_UI, FRAMEWORK, 684),
    /* 484 */ t("QuadraticBezierSegment", NS_UI_MEDIA, CORE, 439),
    /* 485 */ t("QuadraticEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 486 */ t("QuarticEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 487 */ t("Quaternion", NS_UI_MEDIA_MEDIA3D, CORE, 705).converter(488),
    /* 488 */ t("QuaternionConverter", NS_UI_MEDIA_MEDIA3D, CORE, 684),
    /* 489 */ t("QuaternionRotation3D", NS_UI_MEDIA_MEDIA3D, CORE, 520),
    /* 490 */ t("QuinticEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 491 */ t("RadialGradientBrush", NS_UI_MEDIA, CORE, 254).content("GradientStops").converter(60),
    /* 492 */ t("RadioButton", NS_UI_CONTROLS, FRAMEWORK, 658).content("Content"),
    /* 493 */ t("RangeBase", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 113).abstract_type(),
    /* 494 */ t("Rect", NS_UI, BASE, 705).converter(498).constructors(&[&[167, 167, 167, 167]]),
    /* 495 */ t("RectAnimation", NS_UI_MEDIA_ANIMATION, CORE, 496),
    /* 496 */ t("RectAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 497 */ t("RectAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 496).content("KeyFrames"),
    /* 498 */ t("RectConverter", NS_UI, BASE, 684),
    /* 499 */ t("RectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 500 */ t("RectKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 501 */ t("Rectangle", NS_UI_SHAPES, FRAMEWORK, 551),
    /* 502 */ t("RectangleGeometry", NS_UI_MEDIA, CORE, 244).converter(247),
    /* 503 */ t("RelativeSource", NS_UI_DATA, FRAMEWORK, 372).constructors(&[&[504]]),
    /* 504 */ t("RelativeSourceMode", NS_UI_DATA, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 505 */ t("RemoveStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 506 */ t("RenderOptions", NS_UI_MEDIA, CORE, 415),
    /* 507 */ t("RenderTargetBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /* 508 */ t("RepeatBehavior", NS_UI_MEDIA_ANIMATION, CORE, 705).converter(509),
    /* 509 */ t("RepeatBehaviorConverter", NS_UI_MEDIA_ANIMATION, CORE, 684),
    /* 510 */ t("RepeatButton", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 64).content("Content"),
    /* 511 */ t("ResizeGrip", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 113),
    /* 512 */ t("ResizeMode", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 513 */ t("ResourceDictionary", NS_UI, FRAMEWORK, 415).dictionary().usable_before_init(),
    /* 514 */ t("ResourceKey", NS_UI, FRAMEWORK, 372).abstract_type(),
    /* 515 */ t("ResourceReferenceExpressionConverter", NS_UI_MARKUP, FRAMEWORK, 684),
    /* 516 */ t("ResumeStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 517 */ t("RichTextBox", NS_UI_CONTROLS, FRAMEWORK, 628).content("Document"),
    /* 518 */ t("RotateTransform", NS_UI_MEDIA, CORE, 666).converter(671),
    /* 519 */ t("RotateTransform3D", NS_UI_MEDIA_MEDIA3D, CORE, 667),
    /* 520 */ t("Rotation3D", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /* 521 */ t("Rotation3DAnimation", NS_UI_MEDIA_ANIMATION, CORE, 522),
    /* 522 */ t("Rotation3DAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 523 */ t("Rotation3DAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 522).content("KeyFrames"),
    /* 524 */ t("Rotation3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 525 */ t("Rotation3DKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 526 */ t("RoutedCommand", NS_UI_INPUT, CORE, 415),
    /* 527 */ t("RoutedEvent", NS_UI, CORE, 415).no_default_constructor().converter(529),
    /* 528 */ t("RoutedEventArgs", NS_UI, CORE, 415),
    /* 529 */ t("RoutedEventConverter", NS_UI_MARKUP, FRAMEWORK, 684),
    /* 530 */ t("RoutedUICommand", NS_UI_INPUT, CORE, 526),
    /* 531 */ t("RowDefinition", NS_UI_CONTROLS, FRAMEWORK, 135),
    /* 532 */ t("RowDefinitionCollection", NS_UI_CONTROLS, FRAMEWORK, 415).sequence(),
    /* 533 */ t("Run", NS_UI_DOCUMENTS, FRAMEWORK, 300).content("Text"),
    /* 534 */ t("ScaleTransform", NS_UI_MEDIA, CORE, 666).converter(671),
    /* 535 */ t("ScaleTransform3D", NS_UI_MEDIA_MEDIA3D, CORE, 667),
    /* 536 */ t("ScrollBar", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 493),
    /* 537 */ t("ScrollBarVisibility", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 538 */ t("ScrollContentPresenter", NS_UI_CONTROLS, FRAMEWORK, 109),
    /* 539 */ t("ScrollUnit", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 540 */ t("ScrollViewer", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 541 */ t("Section", NS_UI_DOCUMENTS, FRAMEWORK, 43).content("Blocks"),
    /* 542 */ t("SeekStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 543 */ t("SelectionMode", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 544 */ t("Selector", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 328).abstract_type().content("Items"),
    /* 545 */ t("Separator", NS_UI_CONTROLS, FRAMEWORK, 113),
    /* 546 */ t("SetStoryboardSpeedRatio", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 547 */ t("Setter", NS_UI, FRAMEWORK, 548).content("Value"),
    /* 548 */ t("SetterBase", NS_UI, FRAMEWORK, 415).abstract_type(),
    /* 549 */ t("SetterBaseCollection", NS_UI, FRAMEWORK, 415).sequence(),
    /* 550 */ t("SetterTriggerConditionValueConverter", NS_UI_MARKUP, FRAMEWORK, 684),
    /* 551 */ t("Shape", NS_UI_SHAPES, FRAMEWORK, 238).abstract_type(),
    /* 552 */ t("SineEase", NS_UI_MEDIA_ANIMATION, CORE, 190),
    /* 553 */ t("Single", NS_SYSTEM, RUNTIME, 415).converter(554).default_value(KnownDefault::ZeroFloat),
    /* 554 */ t("SingleConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 555 */ t("Size", NS_UI, BASE, 705).converter(559).constructors(&[&[167, 167]]),
    /* 556 */ t("SizeAnimation", NS_UI_MEDIA_ANIMATION, CORE, 557),
    /* 557 */ t("SizeAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 558 */ t("SizeAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 557).content("KeyFrames"),
    /* 559 */ t("SizeConverter", NS_UI, BASE, 684),
    /* 560 */ t("SizeKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 561 */ t("SizeKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 562 */ t("SizeToContent", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 563 */ t("SkewTransform", NS_UI_MEDIA, CORE, 666).converter(671),
    /* 564 */ t("SkipStoryboardToFill", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 565 */ t("Slider", NS_UI_CONTROLS, FRAMEWORK, 493),
    /* 566 */ t("SolidColorBrush", NS_UI_MEDIA, CORE, 59).converter(60),
    /* 567 */ t("SortDescription", NS_UI_DATA, FRAMEWORK, 705),
    /* 568 */ t("SoundPlayerAction", NS_UI_CONTROLS, FRAMEWORK, 679),
    /* 569 */ t("Span", NS_UI_DOCUMENTS, FRAMEWORK, 300).content("Inlines"),
    /* 570 */ t("SpecularMaterial", NS_UI_MEDIA_MEDIA3D, CORE, 373),
    /* 571 */ t("SplineColorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 90),
    /* 572 */ t("SplineDoubleKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 175),
    /* 573 */ t("SplineInt32KeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 319),
    /* 574 */ t("SplinePoint3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 455),
    /* 575 */ t("SplinePointKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 464),
    /* 576 */ t("SplineRectKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 499),
    /* 577 */ t("SplineRotation3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 524),
    /* 578 */ t("SplineSizeKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 560),
    /* 579 */ t("SplineThicknessKeyFrame", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 646),
    /* 580 */ t("SplineVector3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 714),
    /* 581 */ t("SplineVectorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 722),
    /* 582 */ t("SpotLight", NS_UI_MEDIA_MEDIA3D, CORE, 467),
    /* 583 */ t("StackPanel", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 584 */ t("StaticExtension", NS_UI_MARKUP, FRAMEWORK, 372).constructors(&[&[593]]),
    /* 585 */ t("StaticResourceExtension", NS_UI, FRAMEWORK, 372).constructors(&[&[415]]),
    /* 586 */ t("StatusBar", NS_UI_CONTROLS, FRAMEWORK, 328).content("Items"),
    /* 587 */ t("StatusBarItem", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 588 */ t("StopStoryboard", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 115),
    /* 589 */ t("Storyboard", NS_UI_MEDIA_ANIMATION, CORE, 432).content("Children"),
    /* 590 */ t("StreamGeometry", NS_UI_MEDIA, CORE, 244).converter(247),
    /* 591 */ t("Stretch", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 592 */ t("StretchDirection", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 593 */ t("String", NS_SYSTEM, RUNTIME, 415).no_default_constructor().converter(596).default_value(KnownDefault::Null),
    /* 594 */ t("StringAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 595 */ t("StringAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 594).content("KeyFrames"),
    /* 596 */ t("StringConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 597 */ t("StringKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 598 */ t("StringKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 599 */ t("StrokeCollection", NS_UI_INK, CORE, 415).converter(600).sequence(),
    /* 600 */ t("StrokeCollectionConverter", NS_UI, FRAMEWORK, 684),
    /* 601 */ t("Style", NS_UI, FRAMEWORK, 160).content("Setters").dictionary_key("TargetType").usable_before_init(),
    /* 602 */ t("StyleSelector", NS_UI, FRAMEWORK, 415),
    /* 603 */ t("SweepDirection", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 604 */ t("SystemColors", NS_UI, FRAMEWORK, 415),
    /* 605 */ t("SystemFonts", NS_UI, FRAMEWORK, 415),
    /* 606 */ t("SystemParameters", NS_UI, FRAMEWORK, 415),
    /* 607 */ t("TabControl", NS_UI_CONTROLS, FRAMEWORK, 544).content("Items"),
    /* 608 */ t("TabItem", NS_UI_CONTROLS, FRAMEWORK, 276).content("Content"),
    /* 609 */ t("TabPanel", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 430).content("Children"),
    /* 610 */ t("Table", NS_UI_DOCUMENTS, FRAMEWORK, 43).content("RowGroups"),
    /* 611 */ t("TableCell", NS_UI_DOCUMENTS, FRAMEWORK, 635).content("Blocks"),
    /* 612 */ t("TableCellCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 613 */ t("TableColumn", NS_UI_DOCUMENTS, FRAMEWORK, 237),
    /* 614 */ t("TableColumnCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 615 */ t("TableRow", NS_UI_DOCUMENTS, FRAMEWORK, 635).content("Cells"),
    /* 616 */ t("TableRowCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 617 */ t("TableRowGroup", NS_UI_DOCUMENTS, FRAMEWORK, 635).content("Rows"),
    /* 618 */ t("TableRowGroupCollection", NS_UI_DOCUMENTS, FRAMEWORK, 415).sequence(),
    /* 619 */ t("TemplateBindingExpression", NS_UI, FRAMEWORK, 209).no_default_constructor().converter(210),
    /* 620 */ t("TemplateBindingExtension", NS_UI, FRAMEWORK, 372).converter(621).constructors(&[&[138]]),
    /* 621 */ t("TemplateBindingExtensionConverter", NS_UI, FRAMEWORK, 684),
    /* 622 */ t("TemplateContent", NS_UI, FRAMEWORK, 415),
    /* 623 */ t("TemplateKey", NS_UI, FRAMEWORK, 514).abstract_type().converter(624),
    /* 624 */ t("TemplateKeyConverter", NS_UI, FRAMEWORK, 684),
    /* 625 */ t("TextAlignment", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 626 */ t("TextBlock", NS_UI_CONTROLS, FRAMEWORK, 238).content("Inlines"),
    /* 627 */ t("TextBox", NS_UI_CONTROLS, FRAMEWORK, 628).content("Text"),
    /* 628 */ t("TextBoxBase", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 113).abstract_type(),
    /* 629 */ t("TextDecoration", NS_UI, CORE, 11),
    /* 630 */ t("TextDecorationCollection", NS_UI, CORE, 11).converter(631).sequence(),
    /* 631 */ t("TextDecorationCollectionConverter", NS_UI, CORE, 684),
    /* 632 */ t("TextDecorationLocation", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 633 */ t("TextEffect", NS_UI_MEDIA, CORE, 11),
    /* 634 */ t("TextEffectCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 635 */ t("TextElement", NS_UI_DOCUMENTS, FRAMEWORK, 237).abstract_type(),
    /* 636 */ t("TextOptions", NS_UI_MEDIA, CORE, 415),
    /* 637 */ t("TextTrimming", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 638 */ t("TextWrapping", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 639 */ t("ThemeDictionaryExtension", NS_UI, FRAMEWORK, 372).constructors(&[&[593]]),
    /* 640 */ t("ThemeInfoAttribute", NS_UI, FRAMEWORK, 18),
    /* 641 */ t("Thickness", NS_UI, FRAMEWORK, 705).converter(645).constructors(&[&[167], &[167, 167, 167, 167]]),
    /* 642 */ t("ThicknessAnimation", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 643),
    /* 643 */ t("ThicknessAnimationBase", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 13).abstract_type(),
    /* 644 */ t("ThicknessAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 643).content("KeyFrames"),
    /* 645 */ t("ThicknessConverter", NS_UI, FRAMEWORK, 684),
    /* 646 */ t("ThicknessKeyFrame", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 242).abstract_type(),
    /* 647 */ t("ThicknessKeyFrameCollection", NS_UI_MEDIA_ANIMATION, FRAMEWORK, 242).sequence(),
    /* 648 */ t("Thumb", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 113),
    /* 649 */ t("TickBar", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 238),
    /* 650 */ t("TileBrush", NS_UI_MEDIA, CORE, 59).abstract_type().converter(60),
    /* 651 */ t("TileMode", NS_UI_MEDIA, CORE, 199).default_value(KnownDefault::Zero),
    /* 652 */ t("TimeSpan", NS_SYSTEM, RUNTIME, 415).converter(653).default_value(KnownDefault::Zero),
    /* 653 */ t("TimeSpanConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 684),
    /* 654 */ t("Timeline", NS_UI_MEDIA_ANIMATION, CORE, 11).abstract_type(),
    /* 655 */ t("TimelineCollection", NS_UI_MEDIA_ANIMATION, CORE, 11).converter(656).sequence(),
    /* 656 */ t("TimelineCollectionConverter", NS_UI_MEDIA_ANIMATION, CORE, 684),
    /* 657 */ t("TimelineGroup", NS_UI_MEDIA_ANIMATION, CORE, 654).abstract_type().content("Children"),
    /* 658 */ t("ToggleButton", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 64).content("Content"),
    /* 659 */ t("ToolBar", NS_UI_CONTROLS, FRAMEWORK, 277).content("Items"),
    /* 660 */ t("ToolBarOverflowPanel", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 430).content("Children"),
    /* 661 */ t("ToolBarPanel", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 583).content("Children"),
    /* 662 */ t("ToolBarTray", NS_UI_CONTROLS, FRAMEWORK, 238).content("ToolBars"),
    /* 663 */ t("ToolTip", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 664 */ t("ToolTipService", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 665 */ t("Track", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 238),
    /* 666 */ t("Transform", NS_UI_MEDIA, CORE, 243).abstract_type().converter(671),
    /* 667 */ t("Transform3D", NS_UI_MEDIA_MEDIA3D, CORE, 11).abstract_type(),
    /* 668 */ t("Transform3DCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).sequence(),
    /* 669 */ t("Transform3DGroup", NS_UI_MEDIA_MEDIA3D, CORE, 667).content("Children"),
    /* 670 */ t("TransformCollection", NS_UI_MEDIA, CORE, 11).sequence(),
    /* 671 */ t("TransformConverter", NS_UI_MEDIA, CORE, 684),
    /* 672 */ t("TransformGroup", NS_UI_MEDIA, CORE, 666).content("Children").converter(671),
    /* 673 */ t("TransformedBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /* 674 */ t("TranslateTransform", NS_UI_MEDIA, CORE, 666).converter(671),
    /* 675 */ t("TranslateTransform3D", NS_UI_MEDIA_MEDIA3D, CORE, 667),
    /* 676 */ t("TreeView", NS_UI_CONTROLS, FRAMEWORK, 328).content("Items"),
    /* 677 */ t("TreeViewItem", NS_UI_CONTROLS, FRAMEWORK, 277).content("Items"),
    /* 678 */ t("Trigger", NS_UI, FRAMEWORK, 681).content("Setters"),
    /* 679 */ t("TriggerAction", NS_UI, FRAMEWORK, 137).abstract_type(),
    /* 680 */ t("TriggerActionCollection", NS_UI, FRAMEWORK, 415).sequence(),
    /* 681 */ t("TriggerBase", NS_UI, FRAMEWORK, 137).abstract_type(),
    /* 682 */ t("TriggerCollection", NS_UI, FRAMEWORK, 415).sequence(),
    /* 683 */ t("Type", NS_SYSTEM, RUNTIME, 415).abstract_type(),
    /* 684 */ t("TypeConverter", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 415),
    /* 685 */ t("TypeConverterAttribute", NS_SYSTEM_COMPONENTMODEL, SYSTEM, 18),
    /* 686 */ t("TypeExtension", NS_UI_MARKUP, FRAMEWORK, 372).constructors(&[&[593]]),
    /* 687 */ t("Typeface", NS_UI_MEDIA, CORE, 415).no_default_constructor(),
    /* 688 */ t("Typography", NS_UI_DOCUMENTS, FRAMEWORK, 415),
    /* 689 */ t("UIElement", NS_UI, CORE, 735),
    /* 690 */ t("UIElement3D", NS_UI, CORE, 736).abstract_type(),
    /* 691 */ t("UIElementCollection", NS_UI_CONTROLS, FRAMEWORK, 415).sequence(),
    /* 692 */ t("UIPropertyMetadata", NS_UI, FRAMEWORK, 481),
    /* 693 */ t("Underline", NS_UI_DOCUMENTS, FRAMEWORK, 569).content("Inlines"),
    /* 694 */ t("UniformGrid", NS_UI_CONTROLS_PRIMITIVES, FRAMEWORK, 430).content("Children"),
    /* 695 */ t("UpdateSourceTrigger", NS_UI_DATA, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 696 */ t("Uri", NS_SYSTEM, SYSTEM, 415).no_default_constructor().converter(697).constructors(&[&[593]]),
    /* 697 */ t("UriTypeConverter", NS_SYSTEM, SYSTEM, 684),
    /* 698 */ t("UsableDuringInitializationAttribute", NS_UI_MARKUP, BASE, 18),
    /* 699 */ t("UserControl", NS_UI_CONTROLS, FRAMEWORK, 107).content("Content"),
    /* 700 */ t("Validation", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 701 */ t("ValidationError", NS_UI_CONTROLS, FRAMEWORK, 415),
    /* 702 */ t("ValidationErrorEventAction", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 703 */ t("ValidationRule", NS_UI_DATA, FRAMEWORK, 415).abstract_type(),
    /* 704 */ t("ValueSerializer", NS_UI_MARKUP, BASE, 415).abstract_type(),
    /* 705 */ t("ValueType", NS_SYSTEM, RUNTIME, 415).abstract_type(),
    /* 706 */ t("Vector", NS_UI, BASE, 705).converter(721).constructors(&[&[167, 167]]),
    /* 707 */ t("Vector3D", NS_UI_MEDIA_MEDIA3D, CORE, 705).converter(713).constructors(&[&[167, 167, 167]]),
    /* 708 */ t("Vector3DAnimation", NS_UI_MEDIA_ANIMATION, CORE, 709),
    /* 709 */ t("Vector3DAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 710 */ t("Vector3DAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 709).content("KeyFrames"),
    /* 711 */ t("Vector3DCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).converter(712).sequence(),
    /* 712 */ t("Vector3DCollectionConverter", NS_UI_MEDIA_MEDIA3D, CORE, 684),
    /* 713 */ t("Vector3DConverter", NS_UI_MEDIA_MEDIA3D, CORE, 684),
    /* 714 */ t("Vector3DKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 715 */ t("Vector3DKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 716 */ t("VectorAnimation", NS_UI_MEDIA_ANIMATION, CORE, 717),
    /* 717 */ t("VectorAnimationBase", NS_UI_MEDIA_ANIMATION, CORE, 13).abstract_type(),
    /* 718 */ t("VectorAnimationUsingKeyFrames", NS_UI_MEDIA_ANIMATION, CORE, 717).content("KeyFrames"),
    /* 719 */ t("VectorCollection", NS_UI_MEDIA, CORE, 11).converter(720).sequence(),
    /* 720 */ t("VectorCollectionConverter", NS_UI_MEDIA, CORE, 684),
    /* 721 */ t("VectorConverter", NS_UI, BASE, 684),
    /* 722 */ t("VectorKeyFrame", NS_UI_MEDIA_ANIMATION, CORE, 242).abstract_type(),
    /* 723 */ t("VectorKeyFrameCollection", NS_UI_MEDIA_ANIMATION, CORE, 242).sequence(),
    /* 724 */ t("VerticalAlignment", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 725 */ t("VideoDrawing", NS_UI_MEDIA, CORE, 177),
    /* 726 */ t("ViewBase", NS_UI_CONTROLS, FRAMEWORK, 137).abstract_type(),
    /* 727 */ t("Viewbox", NS_UI_CONTROLS, FRAMEWORK, 134).content("Child"),
    /* 728 */ t("Viewport2DVisual3D", NS_UI_MEDIA_MEDIA3D, CORE, 736).content("Visual"),
    /* 729 */ t("Viewport3D", NS_UI_CONTROLS, FRAMEWORK, 238).content("Children"),
    /* 730 */ t("Viewport3DVisual", NS_UI_MEDIA_MEDIA3D, CORE, 735),
    /* 731 */ t("VirtualizationMode", NS_UI_CONTROLS, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 732 */ t("VirtualizingPanel", NS_UI_CONTROLS, FRAMEWORK, 430).abstract_type().content("Children"),
    /* 733 */ t("VirtualizingStackPanel", NS_UI_CONTROLS, FRAMEWORK, 732).content("Children"),
    /* 734 */ t("Visibility", NS_UI, CORE, 199).default_value(KnownDefault::Zero),
    /* 735 */ t("Visual", NS_UI_MEDIA, CORE, 137).abstract_type(),
    /* 736 */ t("Visual3D", NS_UI_MEDIA_MEDIA3D, CORE, 137).abstract_type(),
    /* 737 */ t("Visual3DCollection", NS_UI_MEDIA_MEDIA3D, CORE, 11).sequence(),
    /* 738 */ t("VisualBrush", NS_UI_MEDIA, CORE, 650).converter(60),
    /* 739 */ t("VisualState", NS_UI, FRAMEWORK, 137),
    /* 740 */ t("VisualStateGroup", NS_UI, FRAMEWORK, 137).content("States"),
    /* 741 */ t("VisualStateManager", NS_UI, FRAMEWORK, 137),
    /* 742 */ t("VisualTransition", NS_UI, FRAMEWORK, 137),
    /* 743 */ t("VisualTreeHelper", NS_UI, FRAMEWORK, 415),
    /* 744 */ t("Window", NS_UI, FRAMEWORK, 107).content("Content"),
    /* 745 */ t("WindowStartupLocation", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 746 */ t("WindowState", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 747 */ t("WindowStyle", NS_UI, FRAMEWORK, 199).default_value(KnownDefault::Zero),
    /* 748 */ t("WrapPanel", NS_UI_CONTROLS, FRAMEWORK, 430).content("Children"),
    /* 749 */ t("WriteableBitmap", NS_UI_MEDIA_IMAGING, CORE, 42).converter(297),
    /* 750 */ t("XmlDataProvider", NS_UI_DATA, FRAMEWORK, 126).content("XmlSerializer"),
    /* 751 */ t("XmlDocument", NS_SYSTEM_XML, SYSTEM, 758),
    /* 752 */ t("XmlElement", NS_SYSTEM_XML, SYSTEM, 758),
    /* 753 */ t("XmlLanguage", NS_UI_MARKUP, CORE, 415).no_default_constructor().converter(754),
    /* 754 */ t("XmlLanguageConverter", NS_UI_MARKUP, CORE, 684),
    /* 755 */ t("XmlNamespaceManager", NS_SYSTEM_XML, SYSTEM, 415),
    /* 756 */ t("XmlNamespaceMapping", NS_UI_DATA, FRAMEWORK, 415),
    /* 757 */ t("XmlNamespaceMappingCollection", NS_UI_DATA, FRAMEWORK, 415).sequence(),
    /* 758 */ t("XmlNode", NS_SYSTEM_XML, SYSTEM, 415).abstract_type(),
    /* 759 */ t("ZoomPercentageConverter", NS_UI_DOCUMENTS, FRAMEWORK, 684),
];
