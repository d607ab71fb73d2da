use tracing::info;

use crate::dto::{NewCarouselImage, NewCategory, NewProduct};
use crate::storage::{CatalogStore, NewAdmin, StoreResult};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Fills an empty catalog with the demo admin, categories, slides and
/// products. Does nothing once the default admin exists.
pub async fn seed_catalog(store: &dyn CatalogStore) -> StoreResult<()> {
    if store
        .get_admin_by_username(DEFAULT_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        info!("Sample data already present, skipping seed");
        return Ok(());
    }

    store
        .create_admin(NewAdmin {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            is_active: true,
        })
        .await?;

    let tractors = store
        .create_category(category(
            "Tractors",
            "Powerful and efficient tractors for all farming needs",
            "https://images.unsplash.com/photo-1592280771190-3e2e4d571952",
            "tractors",
        ))
        .await?;
    let harvesters = store
        .create_category(category(
            "Harvesters",
            "Advanced harvesting equipment for maximum efficiency",
            "https://images.unsplash.com/photo-1625246333195-78d9c38ad449",
            "harvesters",
        ))
        .await?;
    let plowing = store
        .create_category(category(
            "Plowing Equipment",
            "Professional plowing tools for soil preparation",
            "https://images.unsplash.com/photo-1416879595882-3373a0480b5b",
            "plowing-equipment",
        ))
        .await?;
    let irrigation = store
        .create_category(category(
            "Irrigation Systems",
            "Efficient water management and irrigation solutions",
            "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b",
            "irrigation-systems",
        ))
        .await?;

    let slides = [
        (
            "Premium Tractors",
            "https://images.unsplash.com/photo-1581578949510-fa7315c4c350",
            "/categories/tractors",
        ),
        (
            "Harvesting Solutions",
            "https://images.unsplash.com/photo-1500937386664-56d1dfef3854",
            "/categories/harvesters",
        ),
        (
            "Quality Tools",
            "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b",
            "/products",
        ),
    ];
    for (order, (title, image_url, link_url)) in (1..).zip(slides) {
        store
            .create_carousel_image(NewCarouselImage {
                title: title.to_string(),
                image_url: image_url.to_string(),
                link_url: Some(link_url.to_string()),
                order: Some(order),
                is_active: Some(true),
            })
            .await?;
    }

    let mut flagship = product(
        "Premium Tractor Model XL-500",
        "High-performance tractor with advanced features for large-scale farming operations",
        "₹12,50,000",
        "https://images.unsplash.com/photo-1558618666-fcd25c85cd64",
        tractors.id,
        "premium-tractor-xl-500",
    );
    flagship.youtube_url = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string());
    flagship.features = Some(strings(&[
        "High-performance engine",
        "GPS navigation",
        "Air conditioning",
        "Hydraulic power steering",
    ]));
    flagship.specifications = Some(strings(&[
        "Engine: 85 HP",
        "Fuel Tank: 65 L",
        "Weight: 3200 kg",
        "Max Speed: 40 km/h",
    ]));

    let products = [
        flagship,
        product(
            "Advanced Combine Harvester CH-300",
            "Efficient harvesting solution with cutting-edge technology for wheat, rice, and other crops",
            "₹28,75,000",
            "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b",
            harvesters.id,
            "advanced-combine-harvester-ch-300",
        ),
        product(
            "Professional Plow System PS-200",
            "Durable plowing equipment for effective soil preparation and cultivation",
            "₹3,25,000",
            "https://images.unsplash.com/photo-1416879595882-3373a0480b5b",
            plowing.id,
            "professional-plow-system-ps-200",
        ),
        product(
            "Smart Irrigation System IS-150",
            "Automated irrigation solution with water-saving technology for optimal crop growth",
            "₹1,85,000",
            "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b",
            irrigation.id,
            "smart-irrigation-system-is-150",
        ),
        product(
            "Farm Tool Kit FTK-Pro",
            "Complete set of essential farming tools for small to medium-scale operations",
            "₹45,000",
            "https://images.unsplash.com/photo-1605000797499-95a51c5269ae",
            tractors.id,
            "farm-tool-kit-ftk-pro",
        ),
        product(
            "Heavy Duty Cultivator HD-400",
            "Robust cultivator for deep soil cultivation and land preparation",
            "₹2,75,000",
            "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b",
            plowing.id,
            "heavy-duty-cultivator-hd-400",
        ),
    ];
    let count = products.len();
    for new_product in products {
        store.create_product(new_product).await?;
    }

    info!(products = count, "Seeded sample catalog");
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn category(name: &str, description: &str, image_url: &str, slug: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: Some(description.to_string()),
        image_url: Some(image_url.to_string()),
        slug: slug.to_string(),
        is_active: Some(true),
    }
}

fn product(
    name: &str,
    description: &str,
    price: &str,
    image_url: &str,
    category_id: i32,
    slug: &str,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Some(price.to_string()),
        image_url: Some(image_url.to_string()),
        images: Some(vec![image_url.to_string()]),
        category_id: Some(category_id),
        is_featured: Some(true),
        is_active: Some(true),
        slug: slug.to_string(),
        youtube_url: None,
        features: None,
        specifications: None,
    }
}
