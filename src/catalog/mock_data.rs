//! Built-in catalog used in place of a backend.

use chrono::NaiveDate;

use super::types::{Category, Experience, User};

#[allow(clippy::too_many_arguments)]
fn experience(
    id: &str,
    title: &str,
    location: &str,
    category: Category,
    price_brl: f64,
    rating: f32,
    review_count: u32,
    duration: &str,
    description: &str,
    highlights: &[&str],
    host: &str,
) -> Experience {
    Experience {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        category,
        price_brl,
        rating,
        review_count,
        duration: duration.to_string(),
        description: description.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        host: host.to_string(),
    }
}

/// The experience catalog.
pub fn mock_experiences() -> Vec<Experience> {
    vec![
        experience(
            "exp-1",
            "Passeio de Veleiro ao Pôr do Sol",
            "Ilhabela, SP",
            Category::Nautical,
            280.0,
            4.9,
            214,
            "3 horas",
            "Navegue pelo canal de São Sebastião a bordo de um veleiro clássico e assista ao pôr do sol com petiscos e bebidas.",
            &["Skipper experiente", "Petiscos e bebidas inclusos", "Parada para mergulho"],
            "Ventos de Ilhabela",
        ),
        experience(
            "exp-2",
            "Trilha da Pedra do Baú",
            "São Bento do Sapucaí, SP",
            Category::Adventure,
            190.0,
            4.8,
            132,
            "6 horas",
            "Subida guiada pela via ferrata até o topo da Pedra do Baú, com vista para a Serra da Mantiqueira.",
            &["Equipamento de segurança", "Guia certificado", "Lanche de trilha"],
            "Mantiqueira Outdoor",
        ),
        experience(
            "exp-3",
            "Roteiro Histórico pelo Pelourinho",
            "Salvador, BA",
            Category::Culture,
            120.0,
            4.7,
            389,
            "4 horas",
            "Caminhada pelo centro histórico com igrejas barrocas, casarões coloniais e uma roda de capoeira.",
            &["Entrada no Museu Afro-Brasileiro", "Guia local", "Apresentação de capoeira"],
            "Bahia Raiz",
        ),
        experience(
            "exp-4",
            "Rota do Vinho na Serra Gaúcha",
            "Bento Gonçalves, RS",
            Category::Gastronomy,
            450.0,
            4.9,
            276,
            "1 dia",
            "Visita a três vinícolas do Vale dos Vinhedos com degustação harmonizada e almoço típico italiano.",
            &["Transporte incluso", "Degustação em 3 vinícolas", "Almoço típico"],
            "Serra Wine Tours",
        ),
        experience(
            "exp-5",
            "Flutuação no Rio da Prata",
            "Bonito, MS",
            Category::Nature,
            320.0,
            5.0,
            198,
            "5 horas",
            "Flutue em águas cristalinas entre cardumes de peixes em um dos rios mais transparentes do mundo.",
            &["Roupa de neoprene e snorkel", "Almoço regional", "Trilha na mata ciliar"],
            "Bonito Natural",
        ),
        experience(
            "exp-6",
            "Mergulho em Fernando de Noronha",
            "Fernando de Noronha, PE",
            Category::Nautical,
            690.0,
            4.9,
            157,
            "4 horas",
            "Batismo de mergulho com instrutores credenciados nas piscinas naturais do arquipélago.",
            &["Instrutor credenciado", "Fotos subaquáticas", "Equipamento completo"],
            "Noronha Divers",
        ),
    ]
}

/// The user shown when logged in.
pub fn mock_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Marina Costa".to_string(),
        email: "marina.costa@moveasy.app".to_string(),
        phone: "+55 11 98765-4321".to_string(),
        location: "São Paulo, SP".to_string(),
        member_since: NaiveDate::from_ymd_opt(2023, 5, 14).unwrap_or_default(),
    }
}
