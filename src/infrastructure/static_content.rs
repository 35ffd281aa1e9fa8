use crate::domain::content::{Language, OrderPageContent};
use crate::domain::ports::ContentProvider;

const FANPAGE_URL: &str = "https://www.facebook.com/share/1NJwTBqBeV/?mibextid=wwXIfr";

/// Built-in Vietnamese and English copy for the order page.
#[derive(Debug, Clone)]
pub struct StaticContent {
    vn: OrderPageContent,
    en: OrderPageContent,
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticContent {
    pub fn new() -> Self {
        Self {
            vn: OrderPageContent {
                form_title: "Thông Tin Đặt Hàng".to_string(),
                form_intro: "Vui lòng điền đầy đủ thông tin bên dưới để hoàn tất đơn hàng. \
                             Chúng tôi sẽ liên hệ xác nhận trong vòng 24 giờ."
                    .to_string(),
                confirm_order: "Xác Nhận Đặt Hàng".to_string(),
                confirmation_title: "Cảm ơn bạn đã đặt hàng!".to_string(),
                confirmation_body: "Đơn hàng của bạn đã được ghi nhận thành công.".to_string(),
                confirmation_follow_up: "Chúng tôi sẽ liên hệ với bạn qua số điện thoại đã cung cấp \
                                         trong vòng 24 giờ tới để xác nhận chi tiết đơn hàng và thời \
                                         gian giao nhận. Xin chân thành cảm ơn quý khách đã tin tưởng \
                                         và ủng hộ!"
                    .to_string(),
                contact_prompt: "Nếu bạn có thắc mắc, vui lòng nhắn tin trực tiếp cho Fanpage:"
                    .to_string(),
                contact_url: FANPAGE_URL.to_string(),
                back_to_collection: "Quay lại bộ sưu tập".to_string(),
            },
            en: OrderPageContent {
                form_title: "Order Information".to_string(),
                form_intro: "Please fill in all the information below to complete your order. \
                             We will contact you for confirmation within 24 hours."
                    .to_string(),
                confirm_order: "Confirm Order".to_string(),
                confirmation_title: "Thank you for your order!".to_string(),
                confirmation_body: "Your order has been successfully recorded.".to_string(),
                confirmation_follow_up: "We will contact you via the provided phone number within \
                                         the next 24 hours to confirm order details and delivery \
                                         time. Thank you sincerely for your trust and support!"
                    .to_string(),
                contact_prompt: "If you have any questions, please message our Fanpage:"
                    .to_string(),
                contact_url: FANPAGE_URL.to_string(),
                back_to_collection: "Back to Collection".to_string(),
            },
        }
    }
}

impl ContentProvider for StaticContent {
    fn content(&self, language: Language) -> &OrderPageContent {
        match language {
            Language::Vn => &self.vn,
            Language::En => &self.en,
        }
    }
}
