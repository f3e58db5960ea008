// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Compact member table and extra well-known members.

use super::{m, KnownMember};
use crate::config::MEMBER_ID_MAX;

/// Members addressable by wire id, sorted by owner then name.
#[rustfmt::skip]
pub(crate) static KNOWN_MEMBERS: [KnownMember; MEMBER_ID_MAX as usize] = [
    /*   1 */ m(1, "Text", 593), // AccessText.Text
    /*   2 */ m(2, "Child", 689), // AdornedElementPlaceholder.Child
    /*   3 */ m(4, "Child", 689), // AdornerDecorator.Child
    /*   4 */ m(10, "Blocks", 44).read_only(), // AnchoredBlock.Blocks
    /*   5 */ m(17, "Items", 287).read_only(), // ArrayExtension.Items
    /*   6 */ m(17, "Type", 683), // ArrayExtension.Type
    /*   7 */ m(22, "HandoffBehavior", 275), // BeginStoryboard.HandoffBehavior
    /*   8 */ m(22, "Name", 593), // BeginStoryboard.Name
    /*   9 */ m(22, "Storyboard", 589), // BeginStoryboard.Storyboard
    /*  10 */ m(25, "Converter", 292), // Binding.Converter
    /*  11 */ m(25, "ConverterParameter", 415), // Binding.ConverterParameter
    /*  12 */ m(25, "ElementName", 593), // Binding.ElementName
    /*  13 */ m(25, "Mode", 31), // Binding.Mode
    /*  14 */ m(25, "Path", 482), // Binding.Path
    /*  15 */ m(25, "RelativeSource", 503), // Binding.RelativeSource
    /*  16 */ m(25, "Source", 415), // Binding.Source
    /*  17 */ m(25, "UpdateSourceTrigger", 695), // Binding.UpdateSourceTrigger
    /*  18 */ m(25, "XPath", 593), // Binding.XPath
    /*  19 */ m(36, "Children", 35), // BitmapEffectGroup.Children
    /*  20 */ m(45, "Child", 689), // BlockUIContainer.Child
    /*  21 */ m(48, "Inlines", 301).read_only(), // Bold.Inlines
    /*  22 */ m(56, "Background", 59), // Border.Background
    /*  23 */ m(56, "BorderBrush", 59), // Border.BorderBrush
    /*  24 */ m(56, "BorderThickness", 641), // Border.BorderThickness
    /*  25 */ m(56, "Child", 689), // Border.Child
    /*  26 */ m(56, "CornerRadius", 116), // Border.CornerRadius
    /*  27 */ m(56, "Padding", 641), // Border.Padding
    /*  28 */ m(62, "Background", 59), // BulletDecorator.Background
    /*  29 */ m(62, "Bullet", 689), // BulletDecorator.Bullet
    /*  30 */ m(64, "ClickMode", 76), // ButtonBase.ClickMode
    /*  31 */ m(64, "Command", 283), // ButtonBase.Command
    /*  32 */ m(64, "CommandParameter", 415), // ButtonBase.CommandParameter
    /*  33 */ m(64, "CommandTarget", 689), // ButtonBase.CommandTarget
    /*  34 */ m(64, "IsPressed", 49).read_only(), // ButtonBase.IsPressed
    /*  35 */ m(71, "Bottom", 167).attachable().converter(344), // Canvas.Bottom
    /*  36 */ m(71, "Left", 167).attachable().converter(344), // Canvas.Left
    /*  37 */ m(71, "Right", 167).attachable().converter(344), // Canvas.Right
    /*  38 */ m(71, "Top", 167).attachable().converter(344), // Canvas.Top
    /*  39 */ m(92, "MaxWidth", 167).converter(344), // ColumnDefinition.MaxWidth
    /*  40 */ m(92, "MinWidth", 167).converter(344), // ColumnDefinition.MinWidth
    /*  41 */ m(92, "SharedSizeGroup", 593), // ColumnDefinition.SharedSizeGroup
    /*  42 */ m(92, "Width", 259), // ColumnDefinition.Width
    /*  43 */ m(103, "Binding", 26), // Condition.Binding
    /*  44 */ m(103, "Property", 138), // Condition.Property
    /*  45 */ m(103, "SourceName", 593), // Condition.SourceName
    /*  46 */ m(103, "Value", 415), // Condition.Value
    /*  47 */ m(107, "Content", 415), // ContentControl.Content
    /*  48 */ m(107, "ContentTemplate", 127), // ContentControl.ContentTemplate
    /*  49 */ m(107, "ContentTemplateSelector", 129), // ContentControl.ContentTemplateSelector
    /*  50 */ m(107, "HasContent", 49).read_only(), // ContentControl.HasContent
    /*  51 */ m(109, "Content", 415), // ContentPresenter.Content
    /*  52 */ m(109, "ContentSource", 593), // ContentPresenter.ContentSource
    /*  53 */ m(109, "ContentTemplate", 127), // ContentPresenter.ContentTemplate
    /*  54 */ m(109, "ContentTemplateSelector", 129), // ContentPresenter.ContentTemplateSelector
    /*  55 */ m(113, "Background", 59), // Control.Background
    /*  56 */ m(113, "BorderBrush", 59), // Control.BorderBrush
    /*  57 */ m(113, "BorderThickness", 641), // Control.BorderThickness
    /*  58 */ m(113, "FontFamily", 225), // Control.FontFamily
    /*  59 */ m(113, "FontSize", 167).converter(227), // Control.FontSize
    /*  60 */ m(113, "FontStyle", 230), // Control.FontStyle
    /*  61 */ m(113, "FontWeight", 233), // Control.FontWeight
    /*  62 */ m(113, "Foreground", 59), // Control.Foreground
    /*  63 */ m(113, "HorizontalContentAlignment", 279), // Control.HorizontalContentAlignment
    /*  64 */ m(113, "Padding", 641), // Control.Padding
    /*  65 */ m(113, "Template", 114), // Control.Template
    /*  66 */ m(113, "VerticalContentAlignment", 724), // Control.VerticalContentAlignment
    /*  67 */ m(114, "TargetType", 683), // ControlTemplate.TargetType
    /*  68 */ m(114, "Triggers", 682).read_only(), // ControlTemplate.Triggers
    /*  69 */ m(127, "DataType", 415), // DataTemplate.DataType
    /*  70 */ m(127, "Triggers", 682).read_only(), // DataTemplate.Triggers
    /*  71 */ m(130, "Binding", 26), // DataTrigger.Binding
    /*  72 */ m(130, "Setters", 549).read_only(), // DataTrigger.Setters
    /*  73 */ m(130, "Value", 415), // DataTrigger.Value
    /*  74 */ m(134, "Child", 689), // Decorator.Child
    /*  75 */ m(135, "SharedSizeGroup", 593), // DefinitionBase.SharedSizeGroup
    /*  76 */ m(162, "Dock", 161).attachable(), // DockPanel.Dock
    /*  77 */ m(162, "LastChildFill", 49), // DockPanel.LastChildFill
    /*  78 */ m(168, "By", 167), // DoubleAnimation.By
    /*  79 */ m(168, "From", 167), // DoubleAnimation.From
    /*  80 */ m(168, "To", 167), // DoubleAnimation.To
    /*  81 */ m(170, "KeyFrames", 176), // DoubleAnimationUsingKeyFrames.KeyFrames
    /*  82 */ m(188, "ResourceKey", 415), // DynamicResourceExtension.ResourceKey
    /*  83 */ m(202, "Event", 527), // EventSetter.Event
    /*  84 */ m(202, "HandledEventsToo", 49), // EventSetter.HandledEventsToo
    /*  85 */ m(202, "Handler", 136).unsupported_accessor(), // EventSetter.Handler
    /*  86 */ m(204, "Actions", 680).read_only(), // EventTrigger.Actions
    /*  87 */ m(204, "RoutedEvent", 527), // EventTrigger.RoutedEvent
    /*  88 */ m(204, "SourceName", 593), // EventTrigger.SourceName
    /*  89 */ m(216, "Pages", 428).read_only(), // FixedDocument.Pages
    /*  90 */ m(218, "Children", 691).read_only(), // FixedPage.Children
    /*  91 */ m(221, "Blocks", 44).read_only(), // FlowDocument.Blocks
    /*  92 */ m(238, "ActualHeight", 167).read_only(), // FrameworkElement.ActualHeight
    /*  93 */ m(238, "ActualWidth", 167).read_only(), // FrameworkElement.ActualWidth
    /*  94 */ m(238, "ContextMenu", 111), // FrameworkElement.ContextMenu
    /*  95 */ m(238, "Cursor", 121), // FrameworkElement.Cursor
    /*  96 */ m(238, "DataContext", 415), // FrameworkElement.DataContext
    /*  97 */ m(238, "FlowDirection", 220), // FrameworkElement.FlowDirection
    /*  98 */ m(238, "Height", 167).converter(344), // FrameworkElement.Height
    /*  99 */ m(238, "HorizontalAlignment", 279), // FrameworkElement.HorizontalAlignment
    /* 100 */ m(238, "Language", 753).ambient(), // FrameworkElement.Language
    /* 101 */ m(238, "LayoutTransform", 666), // FrameworkElement.LayoutTransform
    /* 102 */ m(238, "Margin", 641), // FrameworkElement.Margin
    /* 103 */ m(238, "MaxHeight", 167).converter(344), // FrameworkElement.MaxHeight
    /* 104 */ m(238, "MaxWidth", 167).converter(344), // FrameworkElement.MaxWidth
    /* 105 */ m(238, "MinHeight", 167).converter(344), // FrameworkElement.MinHeight
    /* 106 */ m(238, "MinWidth", 167).converter(344), // FrameworkElement.MinWidth
    /* 107 */ m(238, "Name", 593), // FrameworkElement.Name
    /* 108 */ m(238, "Resources", 513).ambient(), // FrameworkElement.Resources
    /* 109 */ m(238, "Style", 601).ambient(), // FrameworkElement.Style
    /* 110 */ m(238, "Tag", 415), // FrameworkElement.Tag
    /* 111 */ m(238, "ToolTip", 415), // FrameworkElement.ToolTip
    /* 112 */ m(238, "Triggers", 682).read_only(), // FrameworkElement.Triggers
    /* 113 */ m(238, "VerticalAlignment", 724), // FrameworkElement.VerticalAlignment
    /* 114 */ m(238, "Width", 167).converter(344), // FrameworkElement.Width
    /* 115 */ m(239, "Text", 593), // FrameworkElementFactory.Text
    /* 116 */ m(239, "Type", 683), // FrameworkElementFactory.Type
    /* 117 */ m(241, "Resources", 513).ambient(), // FrameworkTemplate.Resources
    /* 118 */ m(241, "Template", 622).privileged_write().deferred_loader(), // FrameworkTemplate.Template
    /* 119 */ m(241, "VisualTree", 239), // FrameworkTemplate.VisualTree
    /* 120 */ m(248, "Brush", 59), // GeometryDrawing.Brush
    /* 121 */ m(248, "Geometry", 244), // GeometryDrawing.Geometry
    /* 122 */ m(248, "Pen", 442), // GeometryDrawing.Pen
    /* 123 */ m(254, "GradientStops", 257), // GradientBrush.GradientStops
    /* 124 */ m(254, "MappingMode", 61), // GradientBrush.MappingMode
    /* 125 */ m(256, "Color", 83), // GradientStop.Color
    /* 126 */ m(256, "Offset", 167), // GradientStop.Offset
    /* 127 */ m(258, "Column", 312).attachable(), // Grid.Column
    /* 128 */ m(258, "ColumnDefinitions", 93).read_only(), // Grid.ColumnDefinitions
    /* 129 */ m(258, "ColumnSpan", 312).attachable(), // Grid.ColumnSpan
    /* 130 */ m(258, "IsSharedSizeScope", 49).attachable(), // Grid.IsSharedSizeScope
    /* 131 */ m(258, "Row", 312).attachable(), // Grid.Row
    /* 132 */ m(258, "RowDefinitions", 532).read_only(), // Grid.RowDefinitions
    /* 133 */ m(258, "RowSpan", 312).attachable(), // Grid.RowSpan
    /* 134 */ m(258, "ShowGridLines", 49), // Grid.ShowGridLines
    /* 135 */ m(276, "HasHeader", 49).read_only(), // HeaderedContentControl.HasHeader
    /* 136 */ m(276, "Header", 415), // HeaderedContentControl.Header
    /* 137 */ m(276, "HeaderTemplate", 127), // HeaderedContentControl.HeaderTemplate
    /* 138 */ m(277, "Header", 415), // HeaderedItemsControl.Header
    /* 139 */ m(277, "HeaderTemplate", 127), // HeaderedItemsControl.HeaderTemplate
    /* 140 */ m(293, "Source", 296), // Image.Source
    /* 141 */ m(293, "Stretch", 591), // Image.Stretch
    /* 142 */ m(294, "ImageSource", 296), // ImageBrush.ImageSource
    /* 143 */ m(302, "Child", 689), // InlineUIContainer.Child
    /* 144 */ m(303, "Command", 283), // InputBinding.Command
    /* 145 */ m(303, "CommandParameter", 415), // InputBinding.CommandParameter
    /* 146 */ m(303, "CommandTarget", 689), // InputBinding.CommandTarget
    /* 147 */ m(303, "Gesture", 305), // InputBinding.Gesture
    /* 148 */ m(328, "AlternationCount", 312), // ItemsControl.AlternationCount
    /* 149 */ m(328, "AlternationIndex", 312).read_only().attachable(), // ItemsControl.AlternationIndex
    /* 150 */ m(328, "DisplayMemberPath", 593), // ItemsControl.DisplayMemberPath
    /* 151 */ m(328, "ItemContainerStyle", 601), // ItemsControl.ItemContainerStyle
    /* 152 */ m(328, "ItemTemplate", 127), // ItemsControl.ItemTemplate
    /* 153 */ m(328, "ItemTemplateSelector", 129), // ItemsControl.ItemTemplateSelector
    /* 154 */ m(328, "Items", 326).read_only(), // ItemsControl.Items
    /* 155 */ m(328, "ItemsPanel", 329), // ItemsControl.ItemsPanel
    /* 156 */ m(328, "ItemsSource", 286), // ItemsControl.ItemsSource
    /* 157 */ m(329, "VisualTree", 239), // ItemsPanelTemplate.VisualTree
    /* 158 */ m(341, "ControlTabNavigation", 342).attachable(), // KeyboardNavigation.ControlTabNavigation
    /* 159 */ m(341, "DirectionalNavigation", 342).attachable(), // KeyboardNavigation.DirectionalNavigation
    /* 160 */ m(341, "IsTabStop", 49).attachable(), // KeyboardNavigation.IsTabStop
    /* 161 */ m(341, "TabIndex", 312).attachable(), // KeyboardNavigation.TabIndex
    /* 162 */ m(341, "TabNavigation", 342).attachable(), // KeyboardNavigation.TabNavigation
    /* 163 */ m(353, "EndPoint", 447), // LinearGradientBrush.EndPoint
    /* 164 */ m(353, "StartPoint", 447), // LinearGradientBrush.StartPoint
    /* 165 */ m(363, "ListItems", 368).read_only(), // List.ListItems
    /* 166 */ m(367, "Blocks", 44).read_only(), // ListItem.Blocks
    /* 167 */ m(405, "Bindings", 415).read_only(), // MultiBinding.Bindings
    /* 168 */ m(405, "Converter", 288), // MultiBinding.Converter
    /* 169 */ m(405, "ConverterParameter", 415), // MultiBinding.ConverterParameter
    /* 170 */ m(407, "Conditions", 104).read_only(), // MultiDataTrigger.Conditions
    /* 171 */ m(407, "Setters", 549).read_only(), // MultiDataTrigger.Setters
    /* 172 */ m(408, "Conditions", 104).read_only(), // MultiTrigger.Conditions
    /* 173 */ m(408, "Setters", 549).read_only(), // MultiTrigger.Setters
    /* 174 */ m(427, "Child", 218), // PageContent.Child
    /* 175 */ m(427, "Source", 696), // PageContent.Source
    /* 176 */ m(430, "Background", 59), // Panel.Background
    /* 177 */ m(430, "Children", 691).read_only(), // Panel.Children
    /* 178 */ m(430, "IsItemsHost", 49), // Panel.IsItemsHost
    /* 179 */ m(430, "ZIndex", 312).attachable(), // Panel.ZIndex
    /* 180 */ m(431, "Inlines", 301).read_only(), // Paragraph.Inlines
    /* 181 */ m(432, "Children", 655), // ParallelTimeline.Children
    /* 182 */ m(434, "Data", 244), // Path.Data
    /* 183 */ m(435, "IsClosed", 49), // PathFigure.IsClosed
    /* 184 */ m(435, "IsFilled", 49), // PathFigure.IsFilled
    /* 185 */ m(435, "Segments", 440), // PathFigure.Segments
    /* 186 */ m(435, "StartPoint", 447), // PathFigure.StartPoint
    /* 187 */ m(438, "Figures", 436), // PathGeometry.Figures
    /* 188 */ m(473, "Child", 689), // Popup.Child
    /* 189 */ m(473, "IsOpen", 49), // Popup.IsOpen
    /* 190 */ m(473, "Placement", 446), // Popup.Placement
    /* 191 */ m(473, "PlacementTarget", 689), // Popup.PlacementTarget
    /* 192 */ m(513, "DeferrableContent", 415).privileged_write(), // ResourceDictionary.DeferrableContent
    /* 193 */ m(513, "MergedDictionaries", 415).read_only(), // ResourceDictionary.MergedDictionaries
    /* 194 */ m(513, "Source", 696), // ResourceDictionary.Source
    /* 195 */ m(531, "Height", 259), // RowDefinition.Height
    /* 196 */ m(531, "MaxHeight", 167).converter(344), // RowDefinition.MaxHeight
    /* 197 */ m(531, "MinHeight", 167).converter(344), // RowDefinition.MinHeight
    /* 198 */ m(533, "Text", 593), // Run.Text
    /* 199 */ m(540, "HorizontalScrollBarVisibility", 537).attachable(), // ScrollViewer.HorizontalScrollBarVisibility
    /* 200 */ m(540, "VerticalScrollBarVisibility", 537).attachable(), // ScrollViewer.VerticalScrollBarVisibility
    /* 201 */ m(541, "Blocks", 44).read_only(), // Section.Blocks
    /* 202 */ m(544, "IsSelected", 49).attachable(), // Selector.IsSelected
    /* 203 */ m(544, "IsSynchronizedWithCurrentItem", 49), // Selector.IsSynchronizedWithCurrentItem
    /* 204 */ m(544, "SelectedIndex", 312), // Selector.SelectedIndex
    /* 205 */ m(544, "SelectedItem", 415), // Selector.SelectedItem
    /* 206 */ m(544, "SelectedValue", 415), // Selector.SelectedValue
    /* 207 */ m(547, "Property", 138), // Setter.Property
    /* 208 */ m(547, "TargetName", 593), // Setter.TargetName
    /* 209 */ m(547, "Value", 415), // Setter.Value
    /* 210 */ m(551, "Fill", 59), // Shape.Fill
    /* 211 */ m(551, "Stretch", 591), // Shape.Stretch
    /* 212 */ m(551, "Stroke", 59), // Shape.Stroke
    /* 213 */ m(551, "StrokeThickness", 167), // Shape.StrokeThickness
    /* 214 */ m(566, "Color", 83), // SolidColorBrush.Color
    /* 215 */ m(569, "Inlines", 301).read_only(), // Span.Inlines
    /* 216 */ m(583, "Orientation", 422), // StackPanel.Orientation
    /* 217 */ m(584, "Member", 593), // StaticExtension.Member
    /* 218 */ m(585, "ResourceKey", 415), // StaticResourceExtension.ResourceKey
    /* 219 */ m(589, "Target", 137).attachable(), // Storyboard.Target
    /* 220 */ m(589, "TargetName", 593).attachable(), // Storyboard.TargetName
    /* 221 */ m(589, "TargetProperty", 482).attachable(), // Storyboard.TargetProperty
    /* 222 */ m(601, "BasedOn", 601), // Style.BasedOn
    /* 223 */ m(601, "Resources", 513).ambient(), // Style.Resources
    /* 224 */ m(601, "Setters", 549).read_only(), // Style.Setters
    /* 225 */ m(601, "TargetType", 683), // Style.TargetType
    /* 226 */ m(601, "Triggers", 682).read_only(), // Style.Triggers
    /* 227 */ m(610, "Columns", 614).read_only(), // Table.Columns
    /* 228 */ m(610, "RowGroups", 618).read_only(), // Table.RowGroups
    /* 229 */ m(620, "Converter", 292), // TemplateBindingExtension.Converter
    /* 230 */ m(620, "Property", 138), // TemplateBindingExtension.Property
    /* 231 */ m(626, "Background", 59), // TextBlock.Background
    /* 232 */ m(626, "FontFamily", 225), // TextBlock.FontFamily
    /* 233 */ m(626, "FontSize", 167).converter(227), // TextBlock.FontSize
    /* 234 */ m(626, "FontStyle", 230), // TextBlock.FontStyle
    /* 235 */ m(626, "FontWeight", 233), // TextBlock.FontWeight
    /* 236 */ m(626, "Foreground", 59), // TextBlock.Foreground
    /* 237 */ m(626, "Inlines", 301).read_only(), // TextBlock.Inlines
    /* 238 */ m(626, "Text", 593), // TextBlock.Text
    /* 239 */ m(626, "TextAlignment", 625), // TextBlock.TextAlignment
    /* 240 */ m(626, "TextDecorations", 630), // TextBlock.TextDecorations
    /* 241 */ m(626, "TextWrapping", 638), // TextBlock.TextWrapping
    /* 242 */ m(635, "Background", 59), // TextElement.Background
    /* 243 */ m(635, "FontFamily", 225).attachable(), // TextElement.FontFamily
    /* 244 */ m(635, "FontSize", 167).attachable().converter(227), // TextElement.FontSize
    /* 245 */ m(635, "FontWeight", 233).attachable(), // TextElement.FontWeight
    /* 246 */ m(635, "Foreground", 59).attachable(), // TextElement.Foreground
    /* 247 */ m(654, "AutoReverse", 49), // Timeline.AutoReverse
    /* 248 */ m(654, "BeginTime", 652), // Timeline.BeginTime
    /* 249 */ m(654, "Duration", 186), // Timeline.Duration
    /* 250 */ m(654, "FillBehavior", 214), // Timeline.FillBehavior
    /* 251 */ m(654, "RepeatBehavior", 508), // Timeline.RepeatBehavior
    /* 252 */ m(654, "SpeedRatio", 167), // Timeline.SpeedRatio
    /* 253 */ m(658, "IsChecked", 49), // ToggleButton.IsChecked
    /* 254 */ m(664, "ToolTip", 415).attachable(), // ToolTipService.ToolTip
    /* 255 */ m(678, "Property", 138), // Trigger.Property
    /* 256 */ m(678, "Setters", 549).read_only(), // Trigger.Setters
    /* 257 */ m(678, "SourceName", 593), // Trigger.SourceName
    /* 258 */ m(678, "Value", 415), // Trigger.Value
    /* 259 */ m(686, "Type", 683), // TypeExtension.Type
    /* 260 */ m(686, "TypeName", 593), // TypeExtension.TypeName
    /* 261 */ m(689, "ClipToBounds", 49), // UIElement.ClipToBounds
    /* 262 */ m(689, "Focusable", 49), // UIElement.Focusable
    /* 263 */ m(689, "IsEnabled", 49), // UIElement.IsEnabled
    /* 264 */ m(689, "Opacity", 167), // UIElement.Opacity
    /* 265 */ m(689, "RenderTransform", 666), // UIElement.RenderTransform
    /* 266 */ m(689, "RenderTransformOrigin", 447), // UIElement.RenderTransformOrigin
    /* 267 */ m(689, "SnapsToDevicePixels", 49), // UIElement.SnapsToDevicePixels
    /* 268 */ m(689, "Visibility", 734), // UIElement.Visibility
    /* 269 */ m(700, "ErrorTemplate", 114).attachable(), // Validation.ErrorTemplate
    /* 270 */ m(700, "HasError", 49).read_only().attachable(), // Validation.HasError
];

/// Members resolvable by name only. They have no wire id and are found
/// after the owner's compact members during name dispatch.
#[rustfmt::skip]
pub(crate) static EXTRA_MEMBERS: [KnownMember; 21] = [
    m(63, "IsCancel", 49), // Button.IsCancel
    m(63, "IsDefault", 49), // Button.IsDefault
    m(74, "IsThreeState", 49), // CheckBox.IsThreeState
    m(95, "IsEditable", 49), // ComboBox.IsEditable
    m(207, "IsExpanded", 49), // Expander.IsExpanded
    m(281, "NavigateUri", 696), // Hyperlink.NavigateUri
    m(364, "SelectionMode", 543), // ListBox.SelectionMode
    m(390, "IsChecked", 49), // MenuItem.IsChecked
    m(426, "Title", 593), // Page.Title
    m(493, "Maximum", 167), // RangeBase.Maximum
    m(493, "Minimum", 167), // RangeBase.Minimum
    m(493, "Value", 167), // RangeBase.Value
    m(503, "AncestorType", 683), // RelativeSource.AncestorType
    m(503, "Mode", 504), // RelativeSource.Mode
    m(627, "IsReadOnly", 49), // TextBox.IsReadOnly
    m(627, "Text", 593), // TextBox.Text
    m(727, "Stretch", 591), // Viewbox.Stretch
    m(744, "SizeToContent", 562), // Window.SizeToContent
    m(744, "Title", 593), // Window.Title
    m(744, "WindowState", 746), // Window.WindowState
    m(748, "Orientation", 422), // WrapPanel.Orientation
];
