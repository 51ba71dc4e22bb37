use crate::error::DataError;
use crate::region::boot::BootSector;
use crate::region::directory::ENTRY_SIZE;
use crate::types::{ClusterID, SectorID};

/// FAT12 volumes hold fewer clusters than this
pub const MAX_CLUSTERS: u32 = 4085;

/// Volume geometry, derived once from boot sector
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Volume {
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub number_of_fats: u8,
    pub sectors_per_fat: u16,
    pub root_entries: u16,
    pub hidden_sectors: u32,
    pub media_descriptor: u8,
}

impl From<&BootSector> for Volume {
    fn from(boot_sector: &BootSector) -> Self {
        Self {
            bytes_per_sector: boot_sector.bytes_per_sector(),
            sectors_per_cluster: boot_sector.sectors_per_cluster(),
            reserved_sectors: boot_sector.reserved_sectors(),
            number_of_fats: boot_sector.number_of_fats(),
            sectors_per_fat: boot_sector.sectors_per_fat(),
            root_entries: boot_sector.root_entries(),
            hidden_sectors: boot_sector.hidden_sectors(),
            media_descriptor: boot_sector.media_descriptor(),
        }
    }
}

impl Volume {
    pub fn sector_size(&self) -> u64 {
        self.bytes_per_sector as u64
    }

    pub fn cluster_size(&self) -> usize {
        self.sectors_per_cluster as usize * self.bytes_per_sector as usize
    }

    /// Byte offset of first FAT from start of medium
    pub fn fat_offset(&self) -> u64 {
        (self.reserved_sectors as u64 + self.hidden_sectors as u64) * self.sector_size()
    }

    /// Byte length of one FAT
    pub fn fat_length(&self) -> usize {
        self.bytes_per_sector as usize * self.sectors_per_fat as usize
    }

    pub fn root_directory_size(&self) -> usize {
        ENTRY_SIZE * self.root_entries as usize
    }

    pub fn root_directory_sectors(&self) -> u64 {
        match self.bytes_per_sector {
            0 => 0,
            size => self.root_directory_size() as u64 / size as u64,
        }
    }

    pub fn root_directory_sector(&self) -> SectorID {
        let fats = self.number_of_fats as u64 * self.sectors_per_fat as u64;
        SectorID::from(fats + self.hidden_sectors as u64 + self.reserved_sectors as u64)
    }

    pub fn first_data_sector(&self) -> SectorID {
        self.root_directory_sector() + self.root_directory_sectors()
    }

    pub fn cluster_sector(&self, cluster_id: ClusterID) -> SectorID {
        let num_sectors = cluster_id.offset() as u64 * self.sectors_per_cluster as u64;
        self.first_data_sector() + num_sectors
    }

    pub fn sector_offset(&self, sector_id: SectorID) -> u64 {
        u64::from(sector_id) * self.sector_size()
    }

    pub fn cluster_offset(&self, cluster_id: ClusterID) -> u64 {
        self.sector_offset(self.cluster_sector(cluster_id))
    }

    /// Number of data clusters, requires total sector count from boot sector
    pub fn cluster_count(&self, total_sectors: u32) -> u32 {
        let first_data_sector = u64::from(self.first_data_sector());
        let data_sectors = (total_sectors as u64).saturating_sub(first_data_sector);
        match self.sectors_per_cluster {
            0 => 0,
            n => (data_sectors / n as u64) as u32,
        }
    }

    pub fn validate(&self, total_sectors: u32) -> Result<(), DataError> {
        if !matches!(self.bytes_per_sector, 512 | 1024 | 2048 | 4096) {
            return Err(DataError::Geometry("bytes per sector"));
        }
        if !self.sectors_per_cluster.is_power_of_two() {
            return Err(DataError::Geometry("sectors per cluster"));
        }
        if self.reserved_sectors == 0 {
            return Err(DataError::Geometry("reserved sectors"));
        }
        if self.number_of_fats == 0 {
            return Err(DataError::Geometry("number of FATs"));
        }
        if self.sectors_per_fat == 0 {
            return Err(DataError::Geometry("sectors per FAT"));
        }
        if self.root_directory_size() % self.bytes_per_sector as usize != 0 {
            return Err(DataError::Geometry("root directory entries"));
        }
        if u64::from(self.first_data_sector()) >= total_sectors as u64 {
            return Err(DataError::Geometry("total sectors"));
        }
        if self.cluster_count(total_sectors) >= MAX_CLUSTERS {
            return Err(DataError::NotFAT12);
        }
        Ok(())
    }
}
