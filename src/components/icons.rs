//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuEye as Eye, LuFlame as Hot, LuMinus as Minus, LuPlus as Plus,
        LuRefreshCw as Returns, LuShieldCheck as Secure, LuShoppingBag as Bag,
        LuShoppingCart as Cart, LuShoppingCart as CartAdd, LuShoppingCart as CartEmpty,
        LuStar as Star, LuTrash2 as Trash, LuTruck as Delivery, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Returns, BsBag as Bag, BsCart3 as Cart, BsCartPlus as CartAdd,
        BsCartX as CartEmpty, BsDashLg as Minus, BsEye as Eye, BsFire as Hot, BsPlusLg as Plus,
        BsShieldCheck as Secure, BsStarFill as Star, BsTrash as Trash, BsTruck as Delivery,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BAG, Bag);
themed_icon!(CART, Cart);
themed_icon!(CART_ADD, CartAdd);
themed_icon!(CART_EMPTY, CartEmpty);
themed_icon!(CLOSE, Close);
themed_icon!(DELIVERY, Delivery);
themed_icon!(EYE, Eye);
themed_icon!(HOT, Hot);
themed_icon!(MINUS, Minus);
themed_icon!(PLUS, Plus);
themed_icon!(RETURNS, Returns);
themed_icon!(SECURE, Secure);
themed_icon!(STAR, Star);
themed_icon!(TRASH, Trash);
