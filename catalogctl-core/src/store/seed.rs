//! Sample catalogue of Manta restaurants used to preload the in-memory store

use crate::domain::{
    Location, Price, PriceRange, Rating, Restaurant, RestaurantDraft, RestaurantId,
};
use crate::validation::ValidationError;

struct Sample {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cuisine: &'static [&'static str],
    address: &'static str,
    sector: &'static str,
    coordinates: (f64, f64),
    range: PriceRange,
    average_price: f64,
    score: f64,
    reviews: u32,
    phone: &'static str,
    email: &'static str,
    opening_hours: &'static str,
    capacity: u32,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "a1b2c3d4-e5f6-4a5b-8c9d-0e1f2a3b4c5d",
        name: "El Pescador Manabita",
        description: "Fresh seafood and traditional Manabí cooking. Known for its conch ceviche and garlic corvina, with a family atmosphere facing the sea.",
        cuisine: &["Mariscos", "Ecuatoriana", "Manabita"],
        address: "Av. Malecón Escénico, junto al Puerto",
        sector: "Tarqui",
        coordinates: (-0.9587, -80.7089),
        range: PriceRange::Moderate,
        average_price: 15.0,
        score: 4.7,
        reviews: 326,
        phone: "0995431287",
        email: "elpescador@gmail.com",
        opening_hours: "Mon-Sun 11:00-22:00",
        capacity: 80,
    },
    Sample {
        id: "b2c3d4e5-f6a7-5b6c-9d0e-1f2a3b4c5d6e",
        name: "Pizzería Sole Mio",
        description: "Italian pizzeria with a wood-fired oven, hand-made dough, Neapolitan pizzas and fresh pasta made in house.",
        cuisine: &["Italiana", "Pizzería", "Pastas"],
        address: "Calle 15 y Av. 24, Local 3",
        sector: "Los Esteros",
        coordinates: (-0.9653, -80.7125),
        range: PriceRange::Moderate,
        average_price: 18.0,
        score: 4.5,
        reviews: 198,
        phone: "0987654321",
        email: "solemio.manta@hotmail.com",
        opening_hours: "Tue-Sun 12:00-23:00, closed Monday",
        capacity: 60,
    },
    Sample {
        id: "c3d4e5f6-a7b8-6c7d-0e1f-2a3b4c5d6e7f",
        name: "Asadero La Brasa del Sur",
        description: "Grill house specialised in Argentine-style asado with premium imported and local cuts, shared platters and house churrasco.",
        cuisine: &["Parrilla", "Argentina", "Carnes"],
        address: "Av. 4 de Noviembre y Calle 103",
        sector: "Miraflores",
        coordinates: (-0.9621, -80.7201),
        range: PriceRange::Expensive,
        average_price: 28.0,
        score: 4.8,
        reviews: 412,
        phone: "0991234567",
        email: "labrasa.manta@gmail.com",
        opening_hours: "Mon-Sun 12:00-23:30",
        capacity: 100,
    },
    Sample {
        id: "d4e5f6a7-b8c9-7d8e-1f2a-3b4c5d6e7f8a",
        name: "Sushi Zen",
        description: "Contemporary Japanese restaurant with a sushi bar, fish of the day, special rolls and live teppanyaki.",
        cuisine: &["Japonesa", "Sushi", "Asiática"],
        address: "Mall del Pacífico, Planta Alta, Local 205",
        sector: "La Delicia",
        coordinates: (-0.9589, -80.7321),
        range: PriceRange::Expensive,
        average_price: 32.0,
        score: 4.6,
        reviews: 267,
        phone: "0998765432",
        email: "info@sushizen.ec",
        opening_hours: "Mon-Sun 12:30-22:30",
        capacity: 55,
    },
    Sample {
        id: "e5f6a7b8-c9d0-8e9f-2a3b-4c5d6e7f8a9b",
        name: "Cafetería Dulce Aroma",
        description: "Boutique café serving highland Ecuadorian coffee, artisan pastries, full breakfasts and set lunches.",
        cuisine: &["Cafetería", "Repostería", "Desayunos"],
        address: "Av. Flavio Reyes entre Calle 12 y 13",
        sector: "Jocay",
        coordinates: (-0.9534, -80.7187),
        range: PriceRange::Economic,
        average_price: 8.0,
        score: 4.4,
        reviews: 523,
        phone: "0993456789",
        email: "dulcearoma.manta@outlook.com",
        opening_hours: "Mon-Sat 07:00-20:00, Sun 08:00-18:00",
        capacity: 40,
    },
    Sample {
        id: "f6a7b8c9-d0e1-9f0a-3b4c-5d6e7f8a9b0c",
        name: "Sabor Criollo",
        description: "Authentic Ecuadorian home cooking: seco de chivo, guatita, fritada and weekend hornado in generous portions.",
        cuisine: &["Ecuatoriana", "Criolla", "Tradicional"],
        address: "Av. 105 entre Calle 101 y 102",
        sector: "El Palmar",
        coordinates: (-0.9701, -80.7098),
        range: PriceRange::Economic,
        average_price: 7.0,
        score: 4.3,
        reviews: 645,
        phone: "0996543210",
        email: "saborcriollo@yahoo.com",
        opening_hours: "Mon-Sun 10:00-21:00",
        capacity: 70,
    },
    Sample {
        id: "a7b8c9d0-e1f2-0a1b-4c5d-6e7f8a9b0c1d",
        name: "Tacos y Más",
        description: "Mexican kitchen run by a chef from Guadalajara: tacos al pastor, burritos, quesadillas and loaded nachos.",
        cuisine: &["Mexicana", "Tacos", "Tex-Mex"],
        address: "Centro Comercial El Paseo, Local 18",
        sector: "Barbasquillo",
        coordinates: (-0.9445, -80.7234),
        range: PriceRange::Moderate,
        average_price: 14.0,
        score: 4.5,
        reviews: 389,
        phone: "0994567890",
        email: "tacosymas.manta@gmail.com",
        opening_hours: "Tue-Sun 13:00-23:00, closed Monday",
        capacity: 65,
    },
    Sample {
        id: "b8c9d0e1-f2a3-1b2c-5d6e-7f8a9b0c1d2e",
        name: "La Parrilla del Mar",
        description: "Grilled seafood and select meats with a panoramic ocean view. Giant prawns and charcoal octopus are the specialty.",
        cuisine: &["Mariscos", "Parrilla", "Fusión"],
        address: "Malecón de Murciélago, sector norte",
        sector: "Murciélago",
        coordinates: (-0.9512, -80.7345),
        range: PriceRange::Expensive,
        average_price: 35.0,
        score: 4.9,
        reviews: 178,
        phone: "0997654321",
        email: "parrillamar@hotmail.com",
        opening_hours: "Wed-Sun 12:00-22:00",
        capacity: 90,
    },
    Sample {
        id: "c9d0e1f2-a3b4-2c3d-6e7f-8a9b0c1d2e3f",
        name: "Vegetariano Vida Sana",
        description: "Fully vegetarian and vegan restaurant: bowls, natural smoothies, plant burgers and desserts without refined sugar.",
        cuisine: &["Vegetariana", "Vegana", "Saludable"],
        address: "Av. 24 entre Calle 20 y 21",
        sector: "Los Esteros",
        coordinates: (-0.9678, -80.7156),
        range: PriceRange::Moderate,
        average_price: 12.0,
        score: 4.2,
        reviews: 234,
        phone: "0995678901",
        email: "vidasana.manta@gmail.com",
        opening_hours: "Mon-Sat 09:00-19:00, closed Sunday",
        capacity: 45,
    },
    Sample {
        id: "d0e1f2a3-b4c5-3d4e-7f8a-9b0c1d2e3f4a",
        name: "Chifa Dragón Dorado",
        description: "Chinese-Ecuadorian chifa with twenty years of tradition: special chaulafán, chop suey and crispy wontons.",
        cuisine: &["China", "Chifa", "Asiática"],
        address: "Av. 113 y Calle 109",
        sector: "La Pradera",
        coordinates: (-0.9734, -80.7023),
        range: PriceRange::Economic,
        average_price: 9.0,
        score: 4.4,
        reviews: 567,
        phone: "0992345678",
        email: "dragondorado@yahoo.com",
        opening_hours: "Mon-Sun 11:00-22:00",
        capacity: 75,
    },
    Sample {
        id: "e1f2a3b4-c5d6-4e5f-8a9b-0c1d2e3f4a5b",
        name: "Mar y Tierra Gourmet",
        description: "Contemporary Ecuadorian fine dining with a tasting menu that pairs local produce with modern technique.",
        cuisine: &["Gourmet", "Fusión", "Alta Cocina"],
        address: "Urbanización Isla Bonita, Calle Principal",
        sector: "Santa Marianita",
        coordinates: (-0.9234, -80.7412),
        range: PriceRange::VeryExpensive,
        average_price: 65.0,
        score: 4.8,
        reviews: 142,
        phone: "0999876543",
        email: "marytierra.reservas@gmail.com",
        opening_hours: "Thu-Sat 19:00-23:00",
        capacity: 35,
    },
    Sample {
        id: "f2a3b4c5-d6e7-5f6a-9b0c-1d2e3f4a5b6c",
        name: "Alitas Picantes Express",
        description: "Chicken wings with fifteen sauces, boneless bites, fries and onion rings. Made for watching sports with friends.",
        cuisine: &["Comida Rápida", "Alitas", "Americana"],
        address: "Av. 4 de Noviembre, frente al Parque Central",
        sector: "Miraflores",
        coordinates: (-0.9598, -80.7189),
        range: PriceRange::Economic,
        average_price: 10.0,
        score: 4.1,
        reviews: 789,
        phone: "0990123456",
        email: "alitaspicantes@hotmail.com",
        opening_hours: "Mon-Sun 14:00-00:00",
        capacity: 50,
    },
];

impl Sample {
    fn build(&self) -> Result<Restaurant, ValidationError> {
        let (latitude, longitude) = self.coordinates;
        let draft = RestaurantDraft {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            cuisine: self.cuisine.iter().map(|c| (*c).to_owned()).collect(),
            location: Location::new(self.address, self.sector)?
                .with_coordinates(latitude, longitude),
            price: Price::new(self.range, self.average_price)?,
            rating: Rating::new(self.score, self.reviews)?,
            phone: self.phone.to_owned(),
            email: self.email.to_owned(),
            opening_hours: self.opening_hours.to_owned(),
            capacity: self.capacity,
        };
        Restaurant::with_id(RestaurantId::parse(self.id)?, draft)
    }
}

/// The sample catalogue, in a fixed order.
pub fn sample_restaurants() -> Result<Vec<Restaurant>, ValidationError> {
    SAMPLES.iter().map(Sample::build).collect()
}
