pub mod aggregate;

pub use aggregate::{
    FilterGroupCreateDto, FilterGroupDto, FilterGroupId, FilterGroupUpdateDto, FilterId,
    FilterCreateValueDto, FilterUpdateDto, FilterValueDto,
};
