//! Initial storefront catalog.
//!
//! Twenty lighting products across the nine fixed categories, with their
//! media attachments. Seed ids are small numeric strings from the catalog's
//! history; products created at runtime get random UUIDs instead.

use crate::domain::{MediaId, MediaKind, MediaReference, Product, ProductId};

fn image(id: &str, url: impl Into<String>, name: &str) -> MediaReference {
    MediaReference {
        id: MediaId::new(id),
        kind: MediaKind::Image,
        url: url.into(),
        name: name.to_string(),
    }
}

fn video(id: &str, url: &str, name: &str) -> MediaReference {
    MediaReference {
        id: MediaId::new(id),
        kind: MediaKind::Video,
        url: url.to_string(),
        name: name.to_string(),
    }
}

fn pexels(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg")
}

/// The seed products, in bucket insertion order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Modern LED Tavan Lambası".to_string(),
            code: "GLB-01-01".to_string(),
            category: "Tavan Lambası".to_string(),
            price: 45.0,
            description:
                "Ayarlanabilir parlaklık ve sıcak beyaz renk sıcaklığına sahip şık modern LED tavan lambası."
                    .to_string(),
            power: Some(24),
            voltage: Some(120),
            efficiency: Some(85),
            lifespan: Some(50_000),
            color: Some("Beyaz".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![
                image("1", pexels(1_571_460), "Ön görünüm"),
                image(
                    "2",
                    "https://drive.google.com/file/d/1TwilM-Eo3L-8sN95s3Ol5bT222nDeYpq/view?usp=sharing",
                    "Yan görünüm",
                ),
            ],
        },
        Product {
            id: ProductId::new("2"),
            name: "Sıva Altı LED Tavan Lambası".to_string(),
            code: "GLB-01-02".to_string(),
            category: "Tavan Lambası".to_string(),
            price: 65.99,
            description:
                "Alçak tavanlı odalar için mükemmel olan düşük profilli sıva altı LED tavan lambası."
                    .to_string(),
            power: Some(18),
            voltage: Some(120),
            efficiency: Some(80),
            lifespan: Some(40_000),
            color: Some("Beyaz".to_string()),
            material: Some("Plastik".to_string()),
            media: vec![image("3", pexels(1_571_461), "Kurulu görünüm")],
        },
        Product {
            id: ProductId::new("3"),
            name: "Akıllı WiFi Tavan Lambası".to_string(),
            code: "GLB-01-03".to_string(),
            category: "Tavan Lambası".to_string(),
            price: 129.99,
            description:
                "WiFi bağlantısı, sesli kontrol ve renk değiştirme özelliklerine sahip akıllı tavan lambası."
                    .to_string(),
            power: Some(36),
            voltage: Some(120),
            efficiency: Some(90),
            lifespan: Some(60_000),
            color: Some("RGB".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![
                image("4", pexels(1_571_462), "Akıllı özellikler"),
                video("5", "https://example.com/smart-light-demo.mp4", "Kurulum rehberi"),
            ],
        },
        Product {
            id: ProductId::new("4"),
            name: "LED'li Tavan Vantilatörü".to_string(),
            code: "GLB-02-01".to_string(),
            category: "Fanli Tavan Lambası".to_string(),
            price: 199.99,
            description:
                "Entegre LED aydınlatma ve uzaktan kumanda ile enerji verimli tavan vantilatörü."
                    .to_string(),
            power: Some(45),
            voltage: Some(120),
            efficiency: Some(75),
            lifespan: Some(30_000),
            color: Some("Beyaz".to_string()),
            material: Some("Çelik".to_string()),
            media: vec![image("6", pexels(1_571_463), "Tam görünüm")],
        },
        Product {
            id: ProductId::new("5"),
            name: "Akıllı Tavan Vantilatörü".to_string(),
            code: "GLB-02-02".to_string(),
            category: "Fanli Tavan Lambası".to_string(),
            price: 299.99,
            description:
                "LED ışık, uygulama kontrolü ve değişken hız ayarları ile akıllı tavan vantilatörü."
                    .to_string(),
            power: Some(60),
            voltage: Some(120),
            efficiency: Some(80),
            lifespan: Some(35_000),
            color: Some("Bronz".to_string()),
            material: Some("Çelik".to_string()),
            media: vec![image("7", pexels(1_571_464), "Bronz kaplama")],
        },
        Product {
            id: ProductId::new("6"),
            name: "6 İnç LED Gömme Spot".to_string(),
            code: "GLB-03-01".to_string(),
            category: "Gömme Tavan Armatürü".to_string(),
            price: 34.99,
            description: "Dimmerli özelliğe sahip yüksek verimli 6 inç LED gömme downlight."
                .to_string(),
            power: Some(12),
            voltage: Some(120),
            efficiency: Some(90),
            lifespan: Some(50_000),
            color: Some("Beyaz".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![image("8", pexels(1_571_465), "Gömme kurulum")],
        },
        Product {
            id: ProductId::new("7"),
            name: "4 İnç Ayarlanabilir Gömme Spot".to_string(),
            code: "GLB-03-02".to_string(),
            category: "Gömme Tavan Armatürü".to_string(),
            price: 42.99,
            description:
                "Vurgu aydınlatması için eğim özelliği olan ayarlanabilir 4 inç gömme spot."
                    .to_string(),
            power: Some(8),
            voltage: Some(120),
            efficiency: Some(85),
            lifespan: Some(45_000),
            color: Some("Beyaz".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![image("9", pexels(1_571_466), "Ayarlanabilir açı")],
        },
        Product {
            id: ProductId::new("8"),
            name: "Kristal LED Avize".to_string(),
            code: "GLB-04-01".to_string(),
            category: "Avize".to_string(),
            price: 449.99,
            description: "LED ampuller ve dimmer özelliği ile zarif kristal avize.".to_string(),
            power: Some(72),
            voltage: Some(120),
            efficiency: Some(75),
            lifespan: Some(40_000),
            color: Some("Krom".to_string()),
            material: Some("Kristal".to_string()),
            media: vec![image("10", pexels(1_571_467), "Kristal detaylar")],
        },
        Product {
            id: ProductId::new("9"),
            name: "Modern Geometrik Avize".to_string(),
            code: "GLB-04-02".to_string(),
            category: "Avize".to_string(),
            price: 329.99,
            description: "Entegre LED şeritler ile çağdaş geometrik avize.".to_string(),
            power: Some(48),
            voltage: Some(120),
            efficiency: Some(80),
            lifespan: Some(45_000),
            color: Some("Siyah".to_string()),
            material: Some("Çelik".to_string()),
            media: vec![image("11", pexels(1_571_468), "Geometrik tasarım")],
        },
        Product {
            id: ProductId::new("10"),
            name: "Güneş Enerjili Yol Lambası".to_string(),
            code: "GLB-05-01".to_string(),
            category: "Güneş Enerjili Lamba".to_string(),
            price: 24.99,
            description:
                "Otomatik açma/kapama özelliği ile hava koşullarına dayanıklı güneş enerjili yol lambası."
                    .to_string(),
            power: Some(3),
            voltage: Some(3),
            efficiency: Some(70),
            lifespan: Some(25_000),
            color: Some("Siyah".to_string()),
            material: Some("Plastik".to_string()),
            media: vec![image("12", pexels(1_571_469), "Yol kurulumu")],
        },
        Product {
            id: ProductId::new("11"),
            name: "Güneş Enerjili Projektör".to_string(),
            code: "GLB-05-02".to_string(),
            category: "Güneş Enerjili Lamba".to_string(),
            price: 79.99,
            description:
                "Hareket sensörü ve uzaktan kumanda ile yüksek güçlü güneş enerjili projektör."
                    .to_string(),
            power: Some(20),
            voltage: Some(12),
            efficiency: Some(75),
            lifespan: Some(30_000),
            color: Some("Siyah".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![image("13", pexels(1_571_470), "Monte edilmiş projektör")],
        },
        Product {
            id: ProductId::new("12"),
            name: "Hareket Sensörlü Anahtar".to_string(),
            code: "GLB-06-01".to_string(),
            category: "Sensörler".to_string(),
            price: 19.99,
            description: "Otomatik aydınlatma kontrolü için PIR hareket sensörlü anahtar."
                .to_string(),
            power: None,
            voltage: Some(120),
            efficiency: None,
            lifespan: None,
            color: None,
            material: Some("Plastik".to_string()),
            media: vec![image("14", pexels(1_571_471), "Duvara monte sensör")],
        },
        Product {
            id: ProductId::new("13"),
            name: "Gün Işığı Sensörü".to_string(),
            code: "GLB-06-02".to_string(),
            category: "Sensörler".to_string(),
            price: 29.99,
            description:
                "Otomatik dış mekan aydınlatma kontrolü için fotohücre gün ışığı sensörü."
                    .to_string(),
            power: None,
            voltage: Some(120),
            efficiency: None,
            lifespan: None,
            color: None,
            material: Some("Plastik".to_string()),
            media: vec![image("15", pexels(1_571_472), "Gün ışığı sensörü")],
        },
        Product {
            id: ProductId::new("14"),
            name: "12V 5A AC-DC Adaptör".to_string(),
            code: "GLB-07-01".to_string(),
            category: "AC-DC Adaptör".to_string(),
            price: 15.99,
            description: "Çoklu fiş türleri ile evrensel 12V 5A AC'den DC'ye güç adaptörü."
                .to_string(),
            power: Some(60),
            voltage: Some(12),
            efficiency: Some(85),
            lifespan: None,
            color: None,
            material: Some("Plastik".to_string()),
            media: vec![image("16", pexels(1_571_473), "AC-DC adaptör")],
        },
        Product {
            id: ProductId::new("15"),
            name: "24V 3A AC-DC Adaptör".to_string(),
            code: "GLB-07-02".to_string(),
            category: "AC-DC Adaptör".to_string(),
            price: 22.99,
            description:
                "Aşırı voltaj koruması ile yüksek verimli 24V 3A AC'den DC'ye güç adaptörü."
                    .to_string(),
            power: Some(72),
            voltage: Some(24),
            efficiency: Some(90),
            lifespan: None,
            color: None,
            material: Some("Plastik".to_string()),
            media: vec![image("17", pexels(1_571_474), "24V adaptör")],
        },
        Product {
            id: ProductId::new("16"),
            name: "12V'den 5V'ye DC-DC Dönüştürücü".to_string(),
            code: "GLB-08-01".to_string(),
            category: "DC-DC Adaptör".to_string(),
            price: 12.99,
            description: "3A çıkış kapasitesi ile 12V'den 5V'ye düşürücü DC-DC dönüştürücü."
                .to_string(),
            power: Some(15),
            voltage: Some(5),
            efficiency: Some(95),
            lifespan: None,
            color: None,
            material: Some("Plastik".to_string()),
            media: vec![image("18", pexels(1_571_475), "DC-DC dönüştürücü")],
        },
        Product {
            id: ProductId::new("17"),
            name: "24V'den 12V'ye DC-DC Dönüştürücü".to_string(),
            code: "GLB-08-02".to_string(),
            category: "DC-DC Adaptör".to_string(),
            price: 18.99,
            description: "10A çıkış ile yüksek verimli 24V'den 12V'ye DC-DC dönüştürücü."
                .to_string(),
            power: Some(120),
            voltage: Some(12),
            efficiency: Some(92),
            lifespan: None,
            color: None,
            material: Some("Alüminyum".to_string()),
            media: vec![image("19", pexels(1_571_476), "Yüksek güç dönüştürücü")],
        },
        Product {
            id: ProductId::new("18"),
            name: "LED Şerit Işık 5m".to_string(),
            code: "GLB-09-01".to_string(),
            category: "LED'ler".to_string(),
            price: 39.99,
            description:
                "Yapışkan arka yüzey ve uzaktan kumanda ile 5 metre su geçirmez LED şerit ışık."
                    .to_string(),
            power: Some(36),
            voltage: Some(12),
            efficiency: Some(85),
            lifespan: Some(50_000),
            color: Some("RGB".to_string()),
            material: Some("Silikon".to_string()),
            media: vec![
                image("20", pexels(1_571_477), "LED şerit renkleri"),
                video("21", "https://example.com/led-strip-demo.mp4", "Renk değiştirme demosu"),
            ],
        },
        Product {
            id: ProductId::new("19"),
            name: "Yüksek Güçlü LED Ampul".to_string(),
            code: "GLB-09-02".to_string(),
            category: "LED'ler".to_string(),
            price: 8.99,
            description: "E27 duy ve 2700K sıcak beyaz renk ile enerji verimli LED ampul."
                .to_string(),
            power: Some(9),
            voltage: Some(120),
            efficiency: Some(90),
            lifespan: Some(25_000),
            color: Some("Sıcak Beyaz".to_string()),
            material: Some("Plastik".to_string()),
            media: vec![image("22", pexels(1_571_478), "LED ampul")],
        },
        Product {
            id: ProductId::new("20"),
            name: "LED Panel Işık".to_string(),
            code: "GLB-09-03".to_string(),
            category: "LED'ler".to_string(),
            price: 49.99,
            description: "Ofis ve ticari uygulamalar için ultra ince LED panel ışık.".to_string(),
            power: Some(40),
            voltage: Some(120),
            efficiency: Some(88),
            lifespan: Some(45_000),
            color: Some("Soğuk Beyaz".to_string()),
            material: Some("Alüminyum".to_string()),
            media: vec![image("23", pexels(1_571_479), "Kurulu panel ışık")],
        },
    ]
}
