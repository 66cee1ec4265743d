// Dweve OGMA - Object Graph Mapper
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Registry fixtures.

use ogma_core::{
    schema, Cardinality, Direction, Model, ModelRegistry, PropertyDefinition, PropertyKind,
    RelationshipDefinition,
};

use super::schemas;

fn from_document(json: &str) -> ModelRegistry {
    let models = schema::models_from_str(json).expect("fixture schema parses");
    ModelRegistry::builder()
        .register_all(models)
        .build()
        .expect("fixture schema is valid")
}

/// Registry built from [`schemas::PEOPLE`].
pub fn people() -> ModelRegistry {
    from_document(schemas::PEOPLE)
}

/// Registry built from [`schemas::LIBRARY`].
pub fn library() -> ModelRegistry {
    from_document(schemas::LIBRARY)
}

/// Registry built from [`schemas::CHAIN`].
pub fn chain() -> ModelRegistry {
    from_document(schemas::CHAIN)
}

/// The minimal `Person{name, age}` model with an eager outgoing `friends`
/// relationship to itself.
pub fn person_model() -> Model {
    Model::new("Person")
        .with_property(PropertyDefinition::new("name", PropertyKind::String))
        .with_property(PropertyDefinition::new("age", PropertyKind::Integer))
        .with_relationship(
            RelationshipDefinition::new(
                "friends",
                Cardinality::ManyNodes,
                "FRIENDS",
                Direction::Out,
                "Person",
            )
            .eager(),
        )
}

/// Registry holding only [`person_model`].
pub fn friends() -> ModelRegistry {
    ModelRegistry::builder()
        .register(person_model())
        .build()
        .expect("fixture schema is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_registry() {
        let registry = people();
        assert_eq!(registry.len(), 3);
        let person = registry.get("Person").unwrap();
        assert_eq!(person.eager().len(), 1);
        assert_eq!(person.primary_key(), "person_id");
    }

    #[test]
    fn test_library_has_every_cardinality_eager() {
        let registry = library();
        let author = registry.get("Author").unwrap();
        let mut cardinalities: Vec<Cardinality> =
            author.eager().iter().map(|r| r.cardinality).collect();
        cardinalities.dedup();
        assert_eq!(cardinalities.len(), 4);
        assert!(registry.get_by_labels(&["Publication", "Book"]).is_some());
    }

    #[test]
    fn test_chain_is_lazy() {
        let registry = chain();
        assert_eq!(registry.len(), 6);
        assert!(registry.iter().all(|m| m.eager().is_empty()));
    }

    #[test]
    fn test_friends_registry() {
        let registry = friends();
        assert!(registry.contains("Person"));
    }
}
