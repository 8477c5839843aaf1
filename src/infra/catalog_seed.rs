//! Built-in sample data for Gebze, loaded once at startup.

use crate::domain::catalog::{Business, Catalog, Category, CityEvent};

pub fn builtin() -> Catalog {
    Catalog::new(businesses(), events())
}

#[allow(clippy::too_many_arguments)]
fn business(
    id: &str,
    name: &str,
    category: Category,
    rating: f32,
    review_count: u32,
    address: &str,
    image_seed: &str,
    description: &str,
    working_hours: &str,
    phone: &str,
    is_promoted: bool,
) -> Business {
    Business {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        rating,
        review_count,
        address: address.to_owned(),
        image_url: image_url(image_seed),
        description: description.to_owned(),
        working_hours: working_hours.to_owned(),
        phone: phone.to_owned(),
        is_promoted,
    }
}

fn image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/800/600")
}

fn businesses() -> Vec<Business> {
    vec![
        business(
            "1",
            "Tarihi Gebze Simitçisi",
            Category::Cafe,
            4.8,
            1240,
            "Hacı Halil, İsmet Paşa Cd. No:12, Gebze",
            "simit",
            "1950'den beri değişmeyen lezzet. Gebze'nin en meşhur çıtır simitlerinin adresi.",
            "06:00 - 20:00",
            "0262 641 00 00",
            true,
        ),
        business(
            "2",
            "Ballıkayalar Et Mangal",
            Category::Restaurant,
            4.6,
            850,
            "Tavşanlı Köyü, Ballıkayalar Tabiat Parkı Yanı",
            "mangal",
            "Doğa ile iç içe, muhteşem vadi manzarası eşliğinde enfes ızgara çeşitleri.",
            "09:00 - 22:00",
            "0262 751 00 00",
            false,
        ),
        business(
            "3",
            "Gebze Teknik Çarşı",
            Category::Service,
            4.2,
            450,
            "Cumhuriyet Mah. 2254. Sk, Gebze",
            "service",
            "Tüm teknik ihtiyaçlarınız, elektronik tamiri ve bilgisayar servis hizmetleri.",
            "08:30 - 19:00",
            "0262 642 00 00",
            false,
        ),
        business(
            "4",
            "Espresso Lab Gebze",
            Category::Cafe,
            4.7,
            2100,
            "Güzeller, Yeni Bağdat Cd. No:500, Gebze",
            "coffee",
            "Üçüncü nesil kahve deneyimi, modern çalışma alanları ve taze pastalar.",
            "07:30 - 00:00",
            "0262 643 00 00",
            true,
        ),
        business(
            "5",
            "Kebapçı İskender",
            Category::Restaurant,
            4.9,
            3200,
            "Sultan Orhan, Menzilhane Cd., Gebze",
            "kebab",
            "Geleneksel Bursa İskender kebabının Gebze'deki en lezzetli durağı.",
            "11:00 - 22:30",
            "0262 644 00 00",
            false,
        ),
    ]
}

fn events() -> Vec<CityEvent> {
    vec![
        CityEvent {
            id: "e1".to_owned(),
            title: "Osman Hamdi Bey Sergisi".to_owned(),
            date: "15 Mart 2024".to_owned(),
            location: "Eskihisar Kalesi".to_owned(),
            image_url: image_url("museum"),
            category: "Kültür & Sanat".to_owned(),
            description: "Ünlü ressam Osman Hamdi Bey'in Gebze yıllarını anlatan özel dijital sergi."
                .to_owned(),
        },
        CityEvent {
            id: "e2".to_owned(),
            title: "Gençlik Konseri: Mabel Matiz".to_owned(),
            date: "20 Mart 2024".to_owned(),
            location: "Gebze Kent Meydanı".to_owned(),
            image_url: image_url("concert"),
            category: "Müzik".to_owned(),
            description: "Baharın gelişini Gebze Kent Meydanı'nda dev bir konserle kutluyoruz."
                .to_owned(),
        },
    ]
}
