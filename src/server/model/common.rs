//! Projection level and conversions between entity enums and their DTO counterparts.

use entity::sea_orm_active_enums::{
    CreationOrigin, DeletionOrigin, LinkDirection, Polarization, Status,
};

use crate::model::{
    beam::LinkDirectionDto,
    common::{CreationOriginDto, DeletionOriginDto, StatusDto},
    transponder::PolarizationDto,
};

/// How much of a record a read endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// The entity's curated summary field set.
    #[default]
    Summary,
    /// Every field, including timestamps and soft-delete metadata.
    Full,
}

impl DetailLevel {
    /// Maps the `detailed` query parameter to a detail level.
    pub fn from_detailed(detailed: bool) -> Self {
        if detailed {
            Self::Full
        } else {
            Self::Summary
        }
    }
}

impl From<StatusDto> for Status {
    fn from(dto: StatusDto) -> Self {
        match dto {
            StatusDto::Active => Status::Active,
            StatusDto::Inactive => Status::Inactive,
        }
    }
}

impl From<Status> for StatusDto {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => StatusDto::Active,
            Status::Inactive => StatusDto::Inactive,
        }
    }
}

impl From<CreationOriginDto> for CreationOrigin {
    fn from(dto: CreationOriginDto) -> Self {
        match dto {
            CreationOriginDto::Inventory => CreationOrigin::Inventory,
            CreationOriginDto::Manual => CreationOrigin::Manual,
        }
    }
}

impl From<CreationOrigin> for CreationOriginDto {
    fn from(origin: CreationOrigin) -> Self {
        match origin {
            CreationOrigin::Inventory => CreationOriginDto::Inventory,
            CreationOrigin::Manual => CreationOriginDto::Manual,
        }
    }
}

impl From<DeletionOrigin> for DeletionOriginDto {
    fn from(origin: DeletionOrigin) -> Self {
        match origin {
            DeletionOrigin::Manual => DeletionOriginDto::Manual,
        }
    }
}

impl From<LinkDirectionDto> for LinkDirection {
    fn from(dto: LinkDirectionDto) -> Self {
        match dto {
            LinkDirectionDto::Uplink => LinkDirection::Uplink,
            LinkDirectionDto::Downlink => LinkDirection::Downlink,
        }
    }
}

impl From<LinkDirection> for LinkDirectionDto {
    fn from(direction: LinkDirection) -> Self {
        match direction {
            LinkDirection::Uplink => LinkDirectionDto::Uplink,
            LinkDirection::Downlink => LinkDirectionDto::Downlink,
        }
    }
}

impl From<PolarizationDto> for Polarization {
    fn from(dto: PolarizationDto) -> Self {
        match dto {
            PolarizationDto::V => Polarization::V,
            PolarizationDto::H => Polarization::H,
            PolarizationDto::Lhcp => Polarization::Lhcp,
            PolarizationDto::Rhcp => Polarization::Rhcp,
        }
    }
}

impl From<Polarization> for PolarizationDto {
    fn from(polarization: Polarization) -> Self {
        match polarization {
            Polarization::V => PolarizationDto::V,
            Polarization::H => PolarizationDto::H,
            Polarization::Lhcp => PolarizationDto::Lhcp,
            Polarization::Rhcp => PolarizationDto::Rhcp,
        }
    }
}
