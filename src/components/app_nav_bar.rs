//! Application navigation bar
//!
//! Main items form a tree. The active top-level item's children become the
//! secondary menu. Mobile and desktop layouts are both produced; the host
//! hides one of them with the breakpoint media queries in the view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Element;
use crate::locale::AppNavBarLocale;
use crate::overrides::{Component, Overrides};
use crate::style::{max_width_query, min_width_query, style_of, Props, StyleObject};
use crate::theme::Theme;

pub const ROOT: &str = "Root";
pub const SPACING: &str = "Spacing";
pub const APP_NAME: &str = "AppName";
pub const PRIMARY_MENU_CONTAINER: &str = "PrimaryMenuContainer";
pub const SECONDARY_MENU_CONTAINER: &str = "SecondaryMenuContainer";
pub const DESKTOP_MENU_CONTAINER: &str = "DesktopMenuContainer";
pub const DESKTOP_MENU: &str = "DesktopMenu";
pub const MAIN_MENU_ITEM: &str = "MainMenuItem";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Primary,
    Secondary,
}

/// Per-item sub-navigation placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPosition {
    pub desktop: Option<Position>,
    pub mobile: Option<Position>,
}

/// A navigation entry. `info` is opaque consumer data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    pub active: bool,
    pub info: Option<Value>,
    pub children: Vec<NavItem>,
    pub nav_position: Option<NavPosition>,
}

impl NavItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }
}

/// Recompute `active` over the whole tree.
///
/// An item is active when the predicate holds for it or any descendant is
/// active.
pub fn map_items_active<F>(items: &[NavItem], predicate: &F) -> Vec<NavItem>
where
    F: Fn(&NavItem) -> bool,
{
    items
        .iter()
        .map(|item| {
            let children = map_items_active(&item.children, predicate);
            let active = predicate(item) || children.iter().any(|c| c.active);
            NavItem {
                active,
                children,
                ..item.clone()
            }
        })
        .collect()
}

/// Focus-visible state of a single menu item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuItemState {
    pub focus_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemEvent {
    Focus { focus_visible: bool },
    Blur,
    Click,
    KeyDown { key: String },
}

impl MenuItemState {
    /// Returns the next state and whether the item was selected.
    pub fn handle(self, event: &MenuItemEvent) -> (Self, bool) {
        match event {
            MenuItemEvent::Focus { focus_visible } => (
                Self {
                    focus_visible: self.focus_visible || *focus_visible,
                },
                false,
            ),
            MenuItemEvent::Blur => (Self::default(), false),
            MenuItemEvent::Click => (self, true),
            MenuItemEvent::KeyDown { key } => (self, key == "Enter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemView {
    pub item: NavItem,
    pub element: Element,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryMenuView {
    pub container: Element,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppNavBarView {
    pub root: Element,
    pub spacing: Element,
    pub app_name: Element,
    pub desktop_menu_container: Element,
    pub desktop_menu: Element,
    pub primary_menu_container: Element,
    pub main_items: Vec<MenuItemView>,
    /// Mobile nav toggle is rendered only when there is something to show.
    pub show_mobile_nav: bool,
    pub desktop_sub_nav: Option<SecondaryMenuView>,
    pub mobile_sub_nav: Option<SecondaryMenuView>,
    /// Style for the mobile wrapper: hidden from the large breakpoint up.
    pub mobile_style: StyleObject,
    /// Style for the desktop wrapper: hidden below the large breakpoint.
    pub desktop_style: StyleObject,
}

/// Consumer inputs to the nav bar.
#[derive(Debug, Clone, Default)]
pub struct AppNavBarProps {
    pub title: String,
    pub main_items: Vec<NavItem>,
    pub user_items: Vec<NavItem>,
    pub overrides: Overrides,
}

fn hidden_style(query: String) -> StyleObject {
    style_of([(query, Value::Object(style_of([("display", "none")])))])
}

fn menu_item(
    item: &NavItem,
    kind: Kind,
    state: MenuItemState,
    overrides: &Overrides,
    theme: &Theme,
) -> MenuItemView {
    let mut base = Props::new();
    base.insert("$active".into(), item.active.into());
    base.insert("$isFocusVisible".into(), state.focus_visible.into());
    base.insert("$kind".into(), serde_json::json!(kind));
    base.insert("aria-selected".into(), item.active.into());
    base.insert("tabIndex".into(), 0.into());
    base.insert("children".into(), Value::String(item.label.clone()));
    MenuItemView {
        item: item.clone(),
        element: Element::build(
            overrides,
            MAIN_MENU_ITEM,
            &Component::styled("StyledMainMenuItem"),
            theme,
            base,
        ),
    }
}

fn secondary_menu(
    items: &[NavItem],
    overrides: &Overrides,
    theme: &Theme,
    locale: &AppNavBarLocale,
) -> SecondaryMenuView {
    let mut base = Props::new();
    base.insert("role".into(), "navigation".into());
    base.insert(
        "aria-label".into(),
        Value::String(locale.secondary_navigation_label.clone()),
    );
    SecondaryMenuView {
        container: Element::build(
            overrides,
            SECONDARY_MENU_CONTAINER,
            &Component::styled("StyledSecondaryMenuContainer"),
            theme,
            base,
        ),
        items: items
            .iter()
            .map(|item| menu_item(item, Kind::Secondary, MenuItemState::default(), overrides, theme))
            .collect(),
    }
}

/// Children of the first active main item that has any, with its
/// `(desktop, mobile)` sub-nav positions.
pub fn active_sub_nav(items: &[NavItem]) -> Option<(&[NavItem], Position, Position)> {
    let item = items
        .iter()
        .find(|item| item.active && !item.children.is_empty())?;
    let position = item.nav_position.unwrap_or_default();
    Some((
        &item.children,
        position.desktop.unwrap_or(Position::Horizontal),
        position.mobile.unwrap_or(Position::Vertical),
    ))
}

/// `focus` holds per-main-item focus state, indexed like `main_items`.
pub fn render(
    props: &AppNavBarProps,
    focus: &[MenuItemState],
    theme: &Theme,
    locale: &AppNavBarLocale,
) -> AppNavBarView {
    let overrides = &props.overrides;
    let build = |key: &str, styled: &str, base: Props| {
        Element::build(overrides, key, &Component::styled(styled), theme, base)
    };

    let mut root_base = Props::new();
    root_base.insert("data-baseweb".into(), "app-nav-bar".into());
    let mut app_name_base = Props::new();
    app_name_base.insert("children".into(), Value::String(props.title.clone()));
    let mut primary_base = Props::new();
    primary_base.insert("role".into(), "navigation".into());
    primary_base.insert(
        "aria-label".into(),
        Value::String(locale.main_navigation_label.clone()),
    );

    let main_items = props
        .main_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let state = focus.get(i).copied().unwrap_or_default();
            menu_item(item, Kind::Primary, state, overrides, theme)
        })
        .collect();

    let (desktop_sub_nav, mobile_sub_nav) = match active_sub_nav(&props.main_items) {
        Some((children, desktop, mobile)) => (
            (desktop == Position::Horizontal)
                .then(|| secondary_menu(children, overrides, theme, locale)),
            (mobile == Position::Horizontal)
                .then(|| secondary_menu(children, overrides, theme, locale)),
        ),
        None => (None, None),
    };

    let large = theme.breakpoints.large;
    AppNavBarView {
        root: build(ROOT, "StyledRoot", root_base),
        spacing: build(SPACING, "StyledSpacing", Props::new()),
        app_name: build(APP_NAME, "StyledAppName", app_name_base),
        desktop_menu_container: build(
            DESKTOP_MENU_CONTAINER,
            "StyledDesktopMenuContainer",
            Props::new(),
        ),
        desktop_menu: build(DESKTOP_MENU, "StyledDesktopMenu", Props::new()),
        primary_menu_container: build(
            PRIMARY_MENU_CONTAINER,
            "StyledPrimaryMenuContainer",
            primary_base,
        ),
        main_items,
        show_mobile_nav: !props.main_items.is_empty() || !props.user_items.is_empty(),
        desktop_sub_nav,
        mobile_sub_nav,
        mobile_style: hidden_style(min_width_query(large)),
        desktop_style: hidden_style(max_width_query(large.saturating_sub(1))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("Home"),
            NavItem::new("Reports").with_children(vec![
                NavItem::new("Daily"),
                NavItem::new("Weekly"),
            ]),
        ]
    }

    #[test]
    fn test_parent_active_through_child() {
        let mapped = map_items_active(&items(), &|item: &NavItem| item.label == "Weekly");
        assert!(!mapped[0].active);
        assert!(mapped[1].active);
        assert!(mapped[1].children[1].active);
        assert!(!mapped[1].children[0].active);
    }

    #[test]
    fn test_predicate_clears_stale_active() {
        let mut stale = items();
        stale[0].active = true;
        let mapped = map_items_active(&stale, &|item: &NavItem| item.label == "Reports");
        assert!(!mapped[0].active);
        assert!(mapped[1].active);
    }

    #[test]
    fn test_menu_item_selection() {
        let state = MenuItemState::default();
        assert_eq!(state.handle(&MenuItemEvent::Click), (state, true));
        assert_eq!(
            state.handle(&MenuItemEvent::KeyDown { key: "Enter".into() }),
            (state, true)
        );
        assert_eq!(
            state.handle(&MenuItemEvent::KeyDown { key: " ".into() }),
            (state, false)
        );
        let (focused, selected) = state.handle(&MenuItemEvent::Focus { focus_visible: true });
        assert!(focused.focus_visible && !selected);
        assert_eq!(focused.handle(&MenuItemEvent::Blur).0, MenuItemState::default());
    }

    #[test]
    fn test_secondary_menu_from_active_item() {
        let main_items = map_items_active(&items(), &|item: &NavItem| item.label == "Daily");
        let props = AppNavBarProps {
            title: "Console".into(),
            main_items,
            ..Default::default()
        };
        let view = render(&props, &[], &Theme::light(), &AppNavBarLocale::default());

        let desktop = view.desktop_sub_nav.expect("desktop sub nav");
        assert_eq!(desktop.items.len(), 2);
        assert_eq!(desktop.items[0].element.prop("$kind"), Some(&json!("secondary")));
        assert_eq!(
            desktop.container.prop("aria-label"),
            Some(&json!("Secondary navigation"))
        );
        // Mobile defaults to vertical, shown inside the mobile menu instead.
        assert!(view.mobile_sub_nav.is_none());
        assert!(view.show_mobile_nav);
        assert_eq!(view.app_name.prop("children"), Some(&json!("Console")));
    }

    #[test]
    fn test_nav_position_override() {
        let mut main_items = items();
        main_items[1].active = true;
        main_items[1].nav_position = Some(NavPosition {
            desktop: Some(Position::Vertical),
            mobile: Some(Position::Horizontal),
        });
        let props = AppNavBarProps {
            main_items,
            ..Default::default()
        };
        let view = render(&props, &[], &Theme::light(), &AppNavBarLocale::default());
        assert!(view.desktop_sub_nav.is_none());
        assert!(view.mobile_sub_nav.is_some());
    }

    #[test]
    fn test_breakpoint_styles() {
        let view = render(
            &AppNavBarProps::default(),
            &[],
            &Theme::light(),
            &AppNavBarLocale::default(),
        );
        assert_eq!(
            Value::Object(view.mobile_style),
            json!({"@media screen and (min-width: 1136px)": {"display": "none"}})
        );
        assert_eq!(
            Value::Object(view.desktop_style),
            json!({"@media screen and (max-width: 1135px)": {"display": "none"}})
        );
        assert!(!view.show_mobile_nav);
    }

    #[test]
    fn test_focus_state_reaches_items() {
        let props = AppNavBarProps {
            main_items: items(),
            ..Default::default()
        };
        let focus = [MenuItemState { focus_visible: true }];
        let view = render(&props, &focus, &Theme::light(), &AppNavBarLocale::default());
        assert_eq!(view.main_items[0].element.prop("$isFocusVisible"), Some(&json!(true)));
        assert_eq!(view.main_items[1].element.prop("$isFocusVisible"), Some(&json!(false)));
        assert_eq!(
            view.primary_menu_container.prop("aria-label"),
            Some(&json!("Main navigation"))
        );
    }
}
