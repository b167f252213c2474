//! Texts preloaded into a fresh store.
//!
//! Two articles of a dozen sentences each. Several sentences are run
//! together without a space after the period, which the segmenter has to
//! cope with.

use crate::id::TextId;

/// An article about civilian uses of drones.
pub const DRONES: &str = "Drones, also known as unmanned aerial vehicles (UAVs), have rapidly evolved from \
    military applications to a wide range of civilian uses.Their ability to navigate \
    autonomously or be remotely controlled makes them ideal for tasks that are dangerous, \
    difficult, or time-consuming for humans.In agriculture, drones are used to map fields, \
    monitor crop health, and apply pesticides and fertilizers with greater precision than \
    traditional methods.This not only reduces waste but also minimizes the environmental \
    impact of farming.In the field of search and rescue, drones can quickly cover large \
    areas to locate missing people or assess damage after natural disasters.Their small size \
    and maneuverability allow them to reach areas inaccessible to ground vehicles or \
    traditional manned aircraft. Additionally, drones are increasingly being used for \
    delivery purposes, particularly in densely populated urban areas.Companies are exploring \
    the use of drones to deliver packages, food, and even medical supplies, potentially \
    revolutionizing the way goods are transported.However, the rise of drones also raises \
    concerns. Privacy advocates worry about the potential for intrusive surveillance, \
    particularly as drones become more affordable and readily available. Additionally, \
    safety regulations are still being developed to address the risks associated with drone \
    operation, especially in crowded airspace. While the benefits of drones are undeniable, \
    it's crucial to find a balance between innovation and responsible use.";

/// An article about Indian cuisine.
pub const INDIAN_CUISINE: &str = "Indian cuisine is a symphony of flavors, aromas, and techniques, reflecting the \
    country's rich history, diverse cultures, and regional variations.From the fiery curries \
    of the south to the creamy Mughlai dishes of the north, each region boasts its own \
    unique culinary identity. Spices play a central role in Indian food, adding depth, \
    complexity, and a touch of warmth. Common ingredients include turmeric, coriander, \
    cumin, chilies, ginger, and garam masala, a blend of aromatic spices.Rice is the staple \
    food in most parts of India, often served alongside dals (lentil stews), vegetables, and \
    meat curries. Vegetarianism is prevalent, with a vast array of lentil-based dishes \
    offering a complete protein source. Street food is a vibrant aspect of Indian cuisine, \
    with vendors offering an array of savory and sweet treats like samosas, chaat (savory \
    snacks), and jalebis (deep-fried, syrup-soaked sweets). Beyond the food itself, Indian \
    cuisine is deeply intertwined with tradition and social customs. Meals are often \
    communal affairs, shared with family and friends. Specific dishes are associated with \
    festivals and religious celebrations, adding a layer of cultural significance to the \
    dining experience. From the bustling street stalls to the elegant fine-dining \
    establishments, Indian cuisine offers a captivating journey for the senses, showcasing \
    the country's cultural richness and culinary heritage.";

/// The bundled samples with their ids.
pub fn samples() -> Vec<(TextId, &'static str)> {
    vec![
        (TextId::Numeric(1), DRONES),
        (TextId::Numeric(2), INDIAN_CUISINE),
    ]
}
