// Services layer - route planning on top of the domain functions

pub mod collection_service;
pub mod serializers;

pub use collection_service::{CollectionService, PagePlan, PlanResult};
pub use serializers::{
    serializer_for_extension, serializer_for_path, JsonSerializer, RouteSerializer, YamlSerializer,
};
