//! English/Arabic strings for storefront chrome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storefront language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Reading direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    /// Persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    /// Translate a chrome string.
    #[must_use]
    pub const fn text(self, key: Text) -> &'static str {
        let (en, ar) = key.pair();
        match self {
            Self::En => en,
            Self::Ar => ar,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            other => Err(format!("unsupported language: {other:?}")),
        }
    }
}

/// Keys for translated chrome strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Home,
    Products,
    About,
    Contact,
    Login,
    Signup,
    Cart,
    Checkout,
    Account,
    Deals,
    Compare,
    Downloads,
    Lookbook,
    Welcome,
    FeaturedProducts,
    ShopNow,
    AddToCart,
    InStock,
    OutOfStock,
    EmptyCart,
    Subtotal,
    Shipping,
    Total,
    FreeShipping,
    PlaceOrder,
    ContinueShopping,
    Email,
    Password,
    Name,
    Message,
    Send,
    CreateAccount,
    SignIn,
    Orders,
    ProductNotFound,
    Loading,
    ThemeError,
    ThemeUnavailable,
    AllRightsReserved,
    ComingSoon,
}

impl Text {
    const fn pair(self) -> (&'static str, &'static str) {
        match self {
            Self::Home => ("Home", "الرئيسية"),
            Self::Products => ("Products", "المنتجات"),
            Self::About => ("About", "من نحن"),
            Self::Contact => ("Contact", "اتصل بنا"),
            Self::Login => ("Login", "تسجيل الدخول"),
            Self::Signup => ("Sign up", "إنشاء حساب"),
            Self::Cart => ("Cart", "السلة"),
            Self::Checkout => ("Checkout", "الدفع"),
            Self::Account => ("Account", "حسابي"),
            Self::Deals => ("Deals", "العروض"),
            Self::Compare => ("Compare", "مقارنة"),
            Self::Downloads => ("Downloads", "التنزيلات"),
            Self::Lookbook => ("Lookbook", "كتالوج الأزياء"),
            Self::Welcome => ("Welcome to", "مرحباً بكم في"),
            Self::FeaturedProducts => ("Featured products", "منتجات مميزة"),
            Self::ShopNow => ("Shop now", "تسوق الآن"),
            Self::AddToCart => ("Add to cart", "أضف إلى السلة"),
            Self::InStock => ("In stock", "متوفر"),
            Self::OutOfStock => ("Out of stock", "غير متوفر"),
            Self::EmptyCart => ("Your cart is empty", "سلتك فارغة"),
            Self::Subtotal => ("Subtotal", "المجموع الفرعي"),
            Self::Shipping => ("Shipping", "الشحن"),
            Self::Total => ("Total", "الإجمالي"),
            Self::FreeShipping => ("Free", "مجاني"),
            Self::PlaceOrder => ("Place order", "إتمام الطلب"),
            Self::ContinueShopping => ("Continue shopping", "متابعة التسوق"),
            Self::Email => ("Email", "البريد الإلكتروني"),
            Self::Password => ("Password", "كلمة المرور"),
            Self::Name => ("Name", "الاسم"),
            Self::Message => ("Message", "الرسالة"),
            Self::Send => ("Send", "إرسال"),
            Self::CreateAccount => ("Create account", "إنشاء الحساب"),
            Self::SignIn => ("Sign in", "دخول"),
            Self::Orders => ("Orders", "الطلبات"),
            Self::ProductNotFound => ("Product not found", "المنتج غير موجود"),
            Self::Loading => ("Loading store", "جارٍ تحميل المتجر"),
            Self::ThemeError => ("Theme Error", "خطأ في القالب"),
            Self::ThemeUnavailable => ("This theme is not available:", "هذا القالب غير متوفر:"),
            Self::AllRightsReserved => ("All rights reserved", "جميع الحقوق محفوظة"),
            Self::ComingSoon => ("Coming soon", "قريباً"),
        }
    }
}
